// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryArticleRepository};
use article_hub::application::{ports::time::Clock, services::ApplicationServices};
use article_hub::domain::article::ArticleRepository;
use article_hub::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

pub const TEST_VERSION: &str = "0.0.0-test";

pub fn build_services(repo: Arc<InMemoryArticleRepository>) -> ApplicationServices {
    let repo: Arc<dyn ArticleRepository> = repo;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    ApplicationServices::new(repo, clock)
}

pub fn build_test_state(repo: Arc<InMemoryArticleRepository>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(repo)),
        app_version: TEST_VERSION.to_string(),
    }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<InMemoryArticleRepository>) -> axum::Router {
    build_router(
        build_test_state(repo),
        &["http://localhost:3000".to_string()],
    )
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "response body is not JSON ({err}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Asserts the error envelope shape and returns the decoded body.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    assert_eq!(json["status"], "error", "unexpected body: {json}");
    assert_eq!(json["error_code"], expected_code, "unexpected body: {json}");
    assert!(json["message"].is_string());
    assert!(json["timestamp"].is_string());
    json
}
