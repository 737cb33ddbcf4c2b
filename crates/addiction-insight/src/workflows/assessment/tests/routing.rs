use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::assessment::history::StateStore;
use crate::workflows::assessment::router::{assess_handler, catalog_handler};
use crate::workflows::assessment::{assessment_router, AssessmentService};

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

#[tokio::test]
async fn assess_handler_requires_disclaimer() {
    let (service, _) = fresh_service();

    let response =
        assess_handler(State(service), Ok(axum::Json(gambling_moderate_input()))).await;

    assert_eq!(response.status(), StatusCode::PRECONDITION_REQUIRED);
}

#[tokio::test]
async fn assess_handler_returns_internal_error_on_store_failure() {
    let service = Arc::new(AssessmentService::new(Arc::new(UnavailableStore)));

    let response =
        assess_handler(State(service), Ok(axum::Json(gambling_moderate_input()))).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn catalog_handler_returns_not_found_for_unknown_domain() {
    let (service, _) = accepted_service();

    let response = catalog_handler(State(service), Path("kratom".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assess_route_records_results() {
    let (service, store) = accepted_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/assessments",
            json!({
                "substanceType": "fentanyl",
                "physicalSymptoms": ["slow_breathing", "blue_skin"],
                "timeline": "weeks",
                "concernLevel": 10
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["domain"], "opioid");
    assert_eq!(body["result"]["totalScore"], 18);
    assert_eq!(body["result"]["riskLevel"], "critical");
    assert_eq!(body["view"]["headline"], "CRITICAL RISK");
    assert!(body["view"]["emergencyBanner"].is_string());

    assert_eq!(store.history().expect("readable").len(), 1);
}

#[tokio::test]
async fn assess_route_rejects_out_of_range_concern() {
    let (service, _) = accepted_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(post_json(
            "/api/v1/assessments",
            json!({ "domain": "alcohol", "concernLevel": 11 }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = json_body(response).await;
    let message = body["error"].as_str().expect("error message");
    assert!(message.contains("concern level 11"), "got {message}");
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let (service, _) = accepted_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments/preview")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"domain\": "))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn disclaimer_route_accepts_and_reports() {
    let (service, _) = fresh_service();
    let router = assessment_router(service);

    let accepted = router
        .clone()
        .oneshot(
            Request::post("/api/v1/disclaimer")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(accepted.status(), StatusCode::OK);

    let status = router
        .oneshot(
            Request::get("/api/v1/disclaimer")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(json_body(status).await, json!({ "accepted": true }));
}

#[tokio::test]
async fn catalog_route_lists_domain_symptoms() {
    let (service, _) = fresh_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/catalog/methamphetamine")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["domain"], "stimulant");
    assert_eq!(body["symptoms"]["physical"][0]["id"], "dilated_pupils");
}

#[tokio::test]
async fn resources_route_lists_directory() {
    let (service, _) = fresh_service();
    let router = assessment_router(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/resources")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["emergencyContacts"][0]["phone"], "911");
    assert_eq!(
        body["interventionStrategies"]["dos"].as_array().map(Vec::len),
        Some(4)
    );
    assert_eq!(
        body["naloxoneGuide"]["steps"][1]["title"],
        "Call 911 Immediately"
    );
}
