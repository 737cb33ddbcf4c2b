use super::super::catalog::DomainCatalog;
use super::super::domain::AssessmentInput;
use super::{ComponentSource, ScoreComponent};

pub(crate) struct Tally {
    pub total_score: u32,
    pub emergency: bool,
    pub components: Vec<ScoreComponent>,
}

/// Sums severity weights for every recognized selection plus the concern level.
///
/// Selections are looked up across the whole domain catalog; the section they
/// were reported under does not matter. The same id submitted under two
/// sections is counted twice.
pub(crate) fn tally(input: &AssessmentInput, catalog: &DomainCatalog) -> Tally {
    let mut components = Vec::new();
    let mut total_score: u32 = 0;
    let mut emergency = false;

    for (category, id) in input.selections() {
        let Some(symptom) = catalog.find(id) else {
            continue;
        };

        let points = symptom.severity.weight();
        total_score = total_score.saturating_add(points);
        emergency |= symptom.emergency_flag;

        let notes = if symptom.emergency_flag {
            format!("{} ({}, emergency sign)", symptom.name, symptom.severity.label())
        } else {
            format!("{} ({})", symptom.name, symptom.severity.label())
        };
        components.push(ScoreComponent {
            source: ComponentSource::Symptom {
                id: symptom.id.clone(),
                category,
                severity: symptom.severity,
                emergency: symptom.emergency_flag,
            },
            points,
            notes,
        });
    }

    let concern = u32::from(input.concern_level.value());
    total_score = total_score.saturating_add(concern);
    components.push(ScoreComponent {
        source: ComponentSource::ConcernLevel,
        points: concern,
        notes: format!("reported concern level {concern}/10"),
    });

    Tally {
        total_score,
        emergency,
        components,
    }
}
