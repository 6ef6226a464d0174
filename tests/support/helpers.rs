// tests/support/helpers.rs
use super::mocks::InMemoryArticleRepo;
use article_crud::application::services::ApplicationServices;
use article_crud::domain::article::ArticleRepository;
use article_crud::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(repo: &InMemoryArticleRepo) -> HttpState {
    let repo: Arc<dyn ArticleRepository> = Arc::new(repo.clone());
    HttpState {
        services: Arc::new(ApplicationServices::new(repo)),
    }
}

/// Router backed by a fresh in-memory store; the store handle is returned for inspection.
pub fn make_test_router() -> (axum::Router, InMemoryArticleRepo) {
    let repo = InMemoryArticleRepo::new();
    let state = build_test_state(&repo);
    let router = build_router(state, &["http://localhost:3000".to_string()]);
    (router, repo)
}

/// Send a request and return the status, content type and raw body.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    json_body: Option<Value>,
) -> (StatusCode, String, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match json_body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    (status, content_type, bytes.to_vec())
}

/// Like [`send`] but parses the body as JSON.
pub async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    json_body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, content_type, bytes) = send(app, method, uri, json_body).await;
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert the uniform `{ error, message }` error body.
pub fn assert_error_body(json: &Value, expected_error: &str) {
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
