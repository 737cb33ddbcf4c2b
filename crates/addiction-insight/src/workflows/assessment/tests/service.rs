use super::common::*;
use crate::workflows::assessment::domain::{ReportingDomain, RiskLevel, SymptomCategory};
use crate::workflows::assessment::history::StateStore;
use crate::workflows::assessment::{AssessmentService, AssessmentServiceError, StateError};
use std::sync::Arc;

#[test]
fn assess_requires_accepted_disclaimer() {
    let (service, store) = fresh_service();

    match service.assess(&gambling_moderate_input()) {
        Err(AssessmentServiceError::DisclaimerRequired) => {}
        other => panic!("expected disclaimer gate, got {other:?}"),
    }
    assert!(store.history().expect("readable").is_empty());
}

#[test]
fn accepting_disclaimer_unlocks_assessments() {
    let (service, _) = fresh_service();

    assert!(!service.disclaimer_accepted().expect("readable"));
    service.accept_disclaimer().expect("accept");
    assert!(service.disclaimer_accepted().expect("readable"));

    let record = service
        .assess(&gambling_moderate_input())
        .expect("assessment recorded");
    assert_eq!(record.result.risk_level, RiskLevel::Moderate);
}

#[test]
fn assess_attaches_resources_and_appends_history_in_order() {
    let (service, store) = accepted_service();

    let first = service
        .assess(&opioid_overdose_input())
        .expect("first assessment");
    let second = service
        .assess(
            &questionnaire(ReportingDomain::Depressant, 2)
                .with_symptom(SymptomCategory::Physical, "bloodshot_eyes"),
        )
        .expect("second assessment");

    assert_eq!(first.result.resources[0].id, "emergency_services");
    assert_eq!(second.result.risk_level, RiskLevel::Low);

    let history = store.history().expect("readable");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].result, first.result);
    assert_eq!(history[1].result, second.result);
    assert!(history[0].recorded_at <= history[1].recorded_at);
}

#[test]
fn preview_skips_gate_and_history() {
    let (service, store) = fresh_service();

    let result = service.preview(&opioid_overdose_input());

    assert_eq!(result.risk_level, RiskLevel::Critical);
    assert!(!result.resources.is_empty());
    assert!(store.history().expect("readable").is_empty());
}

#[test]
fn unmatched_selections_still_score() {
    let (service, _) = accepted_service();
    let input = questionnaire(ReportingDomain::Stimulant, 6)
        .with_symptom(SymptomCategory::Physical, "pinpoint_pupils");

    let record = service.assess(&input).expect("assessment recorded");

    assert_eq!(record.result.total_score, 6);
}

#[test]
fn store_failures_surface_as_state_errors() {
    let service = AssessmentService::new(Arc::new(UnavailableStore));

    match service.assess(&gambling_moderate_input()) {
        Err(AssessmentServiceError::State(StateError::Unavailable(reason))) => {
            assert_eq!(reason, "disk full")
        }
        other => panic!("expected state error, got {other:?}"),
    }
}
