//! Integration tests for the HTTP facade.
//!
//! These tests drive the router in-process with a stub classifier.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{StubClassifier, body_bytes, body_json, context_with, post_find_service};
use svcfind_axum::create_router;
use svcfind_core::ServiceData;
use svcfind_core::ports::ClassifierError;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let classifier = StubClassifier::failing(ClassifierError::NoChoices);
    let app = create_router(context_with(classifier.clone()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn find_service_returns_classification() {
    let classifier = StubClassifier::answering(ServiceData::new(9, "Desbloqueio de Cartão"));
    let app = create_router(context_with(classifier.clone()));

    let response = app
        .oneshot(post_find_service(r#"{"intent":"quero desbloquear meu cartao"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": true,
            "data": {"service_id": 9, "service_name": "Desbloqueio de Cartão"}
        })
    );
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn find_service_reports_diagnostics() {
    let classifier = StubClassifier::answering(ServiceData::new(8, "Telefones de seguradoras"));
    let app = create_router(context_with(classifier));

    let response = app
        .oneshot(post_find_service(r#"{"intent":"preciso de ajuda"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["service_id"], 8);
    assert!(
        body["diagnostics"][0]
            .as_str()
            .unwrap()
            .starts_with("potential mismatch")
    );
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn empty_body_is_invalid_request() {
    let classifier = StubClassifier::answering(ServiceData::new(1, "X"));
    let app = create_router(context_with(classifier.clone()));

    let response = app.oneshot(post_find_service(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request: ")
    );
    assert!(body.get("data").is_none());
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn blank_intent_is_invalid_request() {
    let classifier = StubClassifier::answering(ServiceData::new(1, "X"));
    let app = create_router(context_with(classifier.clone()));

    let response = app
        .oneshot(post_find_service(r#"{"intent":"   "}"#))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": "invalid request: user intent cannot be empty"})
    );
    assert_eq!(classifier.call_count(), 0);
}

#[tokio::test]
async fn classifier_failure_is_internal_error_with_200() {
    let classifier = StubClassifier::failing(ClassifierError::Status {
        status: 429,
        body: "rate limited".to_string(),
    });
    let app = create_router(context_with(classifier));

    let response = app
        .oneshot(post_find_service(r#"{"intent":"perdi meu cartao"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "success": false,
            "error": "internal server error: API request failed with status 429: rate limited"
        })
    );
}

#[tokio::test]
async fn unknown_route_and_wrong_method_are_forced_to_200() {
    let classifier = StubClassifier::answering(ServiceData::new(1, "X"));

    let requests = [
        Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("GET")
            .uri("/api/find-service")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("DELETE")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap(),
    ];

    for request in requests {
        let uri = request.uri().clone();
        let app = create_router(context_with(classifier.clone()));
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
        // Body is whatever the framework produced; only the status is rewritten.
        let _ = body_bytes(response).await;
    }
    assert_eq!(classifier.call_count(), 0);
}
