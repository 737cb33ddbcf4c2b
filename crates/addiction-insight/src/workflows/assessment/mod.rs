//! Addiction warning-sign questionnaire: symptom catalog, scoring, resources, and history.
//!
//! The scoring engine is a pure function of the questionnaire and the read-only
//! catalog. Everything stateful (disclaimer flag, history) sits behind the
//! [`StateStore`] collaborator and is only touched by the service layer.

pub mod catalog;
pub mod domain;
pub mod history;
pub mod resources;
pub mod router;
pub mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, DomainCatalog, SymptomCatalog};
pub use domain::{
    AssessmentInput, AssessmentResult, ConcernLevel, DomainTag, ReportingDomain, Resource,
    ResourceKind, RiskLevel, Severity, Symptom, SymptomCategory, Timeline, ValidationError,
};
pub use history::{
    HistoryEntry, InMemoryStateStore, JsonFileStateStore, LocalState, StateError, StateStore,
};
pub use resources::{
    ContactPriority, EmergencyContact, InterventionStrategies, InterventionStrategy,
    NaloxoneGuide, ResourceDirectory, ResponseStep,
};
pub use router::assessment_router;
pub use scoring::{score, ComponentSource, RecommendationSet, ScoreComponent, ScoringEngine};
pub use service::{AssessmentRecord, AssessmentService, AssessmentServiceError};
pub use views::ResultView;
