use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::domain::{AssessmentInput, AssessmentResult, DomainTag};
use super::history::{HistoryEntry, StateError, StateStore};
use super::resources::ResourceDirectory;
use super::scoring::ScoringEngine;

/// Recorded outcome returned to callers after a gated assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub recorded_at: chrono::DateTime<Utc>,
    pub domain: DomainTag,
    pub result: AssessmentResult,
}

impl From<AssessmentRecord> for HistoryEntry {
    fn from(record: AssessmentRecord) -> Self {
        HistoryEntry {
            recorded_at: record.recorded_at,
            domain: record.domain,
            result: record.result,
        }
    }
}

/// Service composing the disclaimer gate, scoring engine, resource directory, and history.
pub struct AssessmentService<S> {
    engine: ScoringEngine,
    resources: ResourceDirectory,
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: StateStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_engine(ScoringEngine::standard(), ResourceDirectory::standard(), store)
    }

    pub fn with_engine(engine: ScoringEngine, resources: ResourceDirectory, store: Arc<S>) -> Self {
        Self {
            engine,
            resources,
            store,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn resources(&self) -> &ResourceDirectory {
        &self.resources
    }

    pub fn disclaimer_accepted(&self) -> Result<bool, AssessmentServiceError> {
        Ok(self.store.disclaimer_accepted()?)
    }

    pub fn accept_disclaimer(&self) -> Result<(), AssessmentServiceError> {
        self.store.accept_disclaimer()?;
        info!("disclaimer accepted");
        Ok(())
    }

    /// Score with resources attached, without the disclaimer gate or history.
    pub fn preview(&self, input: &AssessmentInput) -> AssessmentResult {
        self.warn_on_unmatched_selection(input);
        let result = self.engine.score(input);
        self.resources.populate(&result, &input.domain)
    }

    /// Score a completed questionnaire and append it to the local history.
    pub fn assess(
        &self,
        input: &AssessmentInput,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if !self.store.disclaimer_accepted()? {
            return Err(AssessmentServiceError::DisclaimerRequired);
        }

        self.warn_on_unmatched_selection(input);
        let scored = self.engine.score(input);
        debug!(
            domain = %input.domain,
            total_score = scored.total_score,
            emergency = scored.emergency_flag,
            "questionnaire scored"
        );

        let record = AssessmentRecord {
            recorded_at: Utc::now(),
            domain: input.domain.clone(),
            result: self.resources.populate(&scored, &input.domain),
        };
        self.store.append(record.clone().into())?;

        info!(
            domain = %record.domain,
            risk_level = %record.result.risk_level,
            emergency = record.result.emergency_flag,
            "assessment recorded"
        );
        Ok(record)
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>, AssessmentServiceError> {
        Ok(self.store.history()?)
    }

    fn warn_on_unmatched_selection(&self, input: &AssessmentInput) {
        if let Err(error) = self.engine.catalog().validate_selection(input) {
            warn!(%error, "selection does not match the catalog; unmatched entries are ignored");
        }
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("the disclaimer must be accepted before an assessment is recorded")]
    DisclaimerRequired,
    #[error(transparent)]
    State(#[from] StateError),
}
