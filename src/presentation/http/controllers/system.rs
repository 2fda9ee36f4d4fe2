// src/presentation/http/controllers/system.rs
use crate::presentation::http::openapi::{RootResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{SecondsFormat, Utc};

#[utoipa::path(
    get,
    path = "/api/v1",
    responses(
        (status = 200, description = "Service banner with version and server time.", body = RootResponse)
    ),
    tag = "System"
)]
pub async fn root(Extension(state): Extension<HttpState>) -> Json<RootResponse> {
    Json(RootResponse {
        status: "success".into(),
        message: "Server is running...".into(),
        version: state.app_version,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
