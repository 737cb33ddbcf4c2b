use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    AssessmentInput, ConcernLevel, ReportingDomain, SymptomCategory,
};
use crate::workflows::assessment::history::{HistoryEntry, StateError, StateStore};
use crate::workflows::assessment::{AssessmentService, InMemoryStateStore};

pub(super) fn concern(level: i64) -> ConcernLevel {
    ConcernLevel::new(level).expect("concern level in range")
}

pub(super) fn questionnaire(domain: ReportingDomain, level: i64) -> AssessmentInput {
    AssessmentInput::new(domain, concern(level))
}

/// Opioid questionnaire with both respiratory emergency signs selected.
pub(super) fn opioid_overdose_input() -> AssessmentInput {
    questionnaire(ReportingDomain::Opioid, 10)
        .with_symptom(SymptomCategory::Physical, "slow_breathing")
        .with_symptom(SymptomCategory::Physical, "blue_skin")
}

/// Gambling questionnaire that lands in the moderate tier (3 + 2 + 5).
pub(super) fn gambling_moderate_input() -> AssessmentInput {
    questionnaire(ReportingDomain::Behavioral, 5)
        .with_symptom(SymptomCategory::Behavioral, "chasing_losses")
        .with_symptom(SymptomCategory::Psychological, "preoccupation")
}

pub(super) fn accepted_service() -> (
    Arc<AssessmentService<InMemoryStateStore>>,
    Arc<InMemoryStateStore>,
) {
    let store = Arc::new(InMemoryStateStore::with_disclaimer_accepted());
    let service = Arc::new(AssessmentService::new(store.clone()));
    (service, store)
}

pub(super) fn fresh_service() -> (
    Arc<AssessmentService<InMemoryStateStore>>,
    Arc<InMemoryStateStore>,
) {
    let store = Arc::new(InMemoryStateStore::default());
    let service = Arc::new(AssessmentService::new(store.clone()));
    (service, store)
}

/// Store that accepts the disclaimer but can never persist history.
pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn disclaimer_accepted(&self) -> Result<bool, StateError> {
        Ok(true)
    }

    fn accept_disclaimer(&self) -> Result<(), StateError> {
        Ok(())
    }

    fn append(&self, _entry: HistoryEntry) -> Result<(), StateError> {
        Err(StateError::Unavailable("disk full".to_string()))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, StateError> {
        Err(StateError::Unavailable("disk full".to_string()))
    }
}

/// Unique path under the system temp dir; the file itself is not created.
pub(super) fn scratch_state_path(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!(
            "addiction-insight-{label}-{}-{n}",
            std::process::id()
        ))
        .join("state.json")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}
