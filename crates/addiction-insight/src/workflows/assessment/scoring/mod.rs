mod policy;
mod rules;

pub use policy::{recommendations_for, RecommendationSet};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::SymptomCatalog;
use super::domain::{AssessmentInput, AssessmentResult, Severity, SymptomCategory};
use policy::classify_risk;

/// Stateless scorer that applies the severity rubric to a questionnaire.
///
/// Holds only a shared read-only catalog, so one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<SymptomCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<SymptomCatalog>) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(SymptomCatalog::standard())
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn score(&self, input: &AssessmentInput) -> AssessmentResult {
        let tally = rules::tally(input, self.catalog.resolve(&input.domain));

        let risk_level = classify_risk(tally.total_score, tally.emergency);
        let recommendations =
            recommendations_for(risk_level, tally.emergency, &input.domain).to_vec();

        AssessmentResult {
            total_score: tally.total_score,
            risk_level,
            emergency_flag: tally.emergency,
            recommendations,
            resources: Vec::new(),
        }
    }

    /// Itemized contributions behind [`ScoringEngine::score`], for audits and display.
    pub fn breakdown(&self, input: &AssessmentInput) -> Vec<ScoreComponent> {
        rules::tally(input, self.catalog.resolve(&input.domain)).components
    }
}

/// Scores against the built-in catalog.
pub fn score(input: &AssessmentInput) -> AssessmentResult {
    ScoringEngine::standard().score(input)
}

/// What a single contribution to the total came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ComponentSource {
    Symptom {
        id: String,
        category: SymptomCategory,
        severity: Severity,
        emergency: bool,
    },
    ConcernLevel,
}

/// Discrete contribution to a total score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    #[serde(flatten)]
    pub source: ComponentSource,
    pub points: u32,
    pub notes: String,
}
