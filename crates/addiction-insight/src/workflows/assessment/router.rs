use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::DomainCatalog;
use super::domain::{AssessmentInput, DomainTag, ReportingDomain, Resource};
use super::history::{StateError, StateStore};
use super::resources::{EmergencyContact, InterventionStrategies, NaloxoneGuide};
use super::service::{AssessmentService, AssessmentServiceError};
use super::views::ResultView;

/// Catalog listing for one reporting domain.
#[derive(Debug, Serialize)]
pub struct DomainCatalogView<'a> {
    pub domain: ReportingDomain,
    pub label: &'static str,
    pub description: &'static str,
    pub symptoms: &'a DomainCatalog,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceDirectoryView<'a> {
    emergency_contacts: &'static [EmergencyContact],
    treatment_resources: &'a [Resource],
    intervention_strategies: InterventionStrategies,
    naloxone_guide: NaloxoneGuide,
}

/// Router builder exposing HTTP endpoints for the questionnaire workflow.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(assess_handler::<S>))
        .route("/api/v1/assessments/preview", post(preview_handler::<S>))
        .route("/api/v1/assessments/history", get(history_handler::<S>))
        .route(
            "/api/v1/disclaimer",
            get(disclaimer_status_handler::<S>).post(accept_disclaimer_handler::<S>),
        )
        .route("/api/v1/catalog", get(catalog_index_handler::<S>))
        .route("/api/v1/catalog/:domain", get(catalog_handler::<S>))
        .route("/api/v1/resources", get(resources_handler::<S>))
        .with_state(service)
}

pub(crate) async fn assess_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AssessmentInput>, JsonRejection>,
) -> Response
where
    S: StateStore + 'static,
{
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    match with_store(service, move |service| service.assess(&input)).await {
        Ok(record) => {
            let view = ResultView::from_result(&record.result);
            let payload = json!({
                "recordedAt": record.recorded_at,
                "domain": record.domain,
                "result": record.result,
                "view": view,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(AssessmentServiceError::DisclaimerRequired) => {
            let payload = json!({
                "error": AssessmentServiceError::DisclaimerRequired.to_string(),
            });
            (StatusCode::PRECONDITION_REQUIRED, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn preview_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<Json<AssessmentInput>, JsonRejection>,
) -> Response
where
    S: StateStore + 'static,
{
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    let result = service.preview(&input);
    let view = ResultView::from_result(&result);
    let payload = json!({ "result": result, "view": view });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn history_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match with_store(service, |service| service.history()).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn disclaimer_status_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match with_store(service, |service| service.disclaimer_accepted()).await {
        Ok(accepted) => (StatusCode::OK, Json(json!({ "accepted": accepted }))).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn accept_disclaimer_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match with_store(service, |service| service.accept_disclaimer()).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "accepted": true }))).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn catalog_index_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    let catalog = service.engine().catalog();
    let domains: Vec<DomainCatalogView<'_>> = ReportingDomain::ALL
        .into_iter()
        .map(|domain| catalog_view(domain, catalog.domain(domain)))
        .collect();
    (StatusCode::OK, Json(domains)).into_response()
}

pub(crate) async fn catalog_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(domain): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    match DomainTag::from(domain) {
        DomainTag::Known(domain) => {
            let symptoms = service.engine().catalog().domain(domain);
            (StatusCode::OK, Json(catalog_view(domain, symptoms))).into_response()
        }
        DomainTag::Unrecognized(tag) => {
            let payload = json!({
                "error": format!("unknown reporting domain '{tag}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn resources_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    let directory = service.resources();
    let view = ResourceDirectoryView {
        emergency_contacts: directory.emergency_contacts(),
        treatment_resources: directory.treatment_resources(),
        intervention_strategies: directory.intervention_strategies(),
        naloxone_guide: directory.naloxone_guide(),
    };
    (StatusCode::OK, Json(view)).into_response()
}

fn catalog_view(domain: ReportingDomain, symptoms: &DomainCatalog) -> DomainCatalogView<'_> {
    DomainCatalogView {
        domain,
        label: domain.label(),
        description: domain.description(),
        symptoms,
    }
}

/// Store calls may block on file I/O and locks, so they run off the async workers.
async fn with_store<S, T, F>(
    service: Arc<AssessmentService<S>>,
    call: F,
) -> Result<T, AssessmentServiceError>
where
    S: StateStore + 'static,
    T: Send + 'static,
    F: FnOnce(&AssessmentService<S>) -> Result<T, AssessmentServiceError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|err| StateError::Unavailable(format!("state task failed: {err}")))?
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (rejection.status(), Json(payload)).into_response()
}

fn internal_error(error: AssessmentServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
