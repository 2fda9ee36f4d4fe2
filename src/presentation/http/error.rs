// src/presentation/http/error.rs
use crate::application::{ApplicationError, ApplicationResult, ErrorCode};
use crate::presentation::http::response::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
    details: Option<Map<String, Value>>,
    path: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::Conflict(_) => StatusCode::CONFLICT,
            ApplicationError::CreateFailed
            | ApplicationError::ListFailed
            | ApplicationError::UpdateFailed
            | ApplicationError::DeleteFailed
            | ApplicationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &err {
            ApplicationError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };

        Self::new(status, err.code(), message)
    }

    /// Request could not be decoded: bad JSON, query string or path segment.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError,
            message.into(),
        )
    }

    fn new(status: StatusCode, code: ErrorCode, message: String) -> Self {
        Self {
            status,
            code,
            message,
            details: None,
            path: None,
        }
    }

    /// Tags validation failures with the operation that rejected them.
    #[must_use]
    pub fn with_field(mut self, field: &str) -> Self {
        if self.status == StatusCode::BAD_REQUEST {
            let mut details = Map::new();
            details.insert("field".into(), Value::String(field.to_string()));
            self.details = Some(details);
        }
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut body = ErrorResponse::new(self.message, self.code);
        if let Some(details) = self.details {
            body = body.with_details(details);
        }
        if let Some(path) = self.path {
            body = body.with_path(path);
        }
        (self.status, Json(body)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
