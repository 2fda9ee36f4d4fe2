// src/application/error.rs
use crate::domain::errors::ValidationError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Error surface of the article usecases. Storage failures are folded into
/// the coarse `*Failed` kinds so no backend detail leaks to callers.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("failed to create article")]
    CreateFailed,

    #[error("failed to get articles")]
    ListFailed,

    #[error("failed to update article")]
    UpdateFailed,

    #[error("failed to delete article")]
    DeleteFailed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn article_not_found() -> Self {
        Self::not_found("article not found")
    }

    pub fn article_exists() -> Self {
        Self::conflict("article already exists")
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => ErrorCode::from(err),
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Conflict(_) => ErrorCode::Conflict,
            Self::CreateFailed => ErrorCode::CreateFailed,
            Self::ListFailed => ErrorCode::DatabaseError,
            Self::UpdateFailed => ErrorCode::UpdateFailed,
            Self::DeleteFailed => ErrorCode::DeleteFailed,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Machine-readable error codes. The serialised strings are part of the wire
/// contract; messages may change, codes may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    TitleRequired,
    TitleInvalid,
    ContentRequired,
    ContentInvalid,
    CategoryRequired,
    StatusInvalid,
    NotFound,
    Conflict,
    DatabaseError,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    #[serde(rename = "INTERNAL_SERVER_ERROR")]
    InternalError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::TitleInvalid => "TITLE_INVALID",
            Self::ContentRequired => "CONTENT_REQUIRED",
            Self::ContentInvalid => "CONTENT_INVALID",
            Self::CategoryRequired => "CATEGORY_REQUIRED",
            Self::StatusInvalid => "STATUS_INVALID",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::CreateFailed => "CREATE_FAILED",
            Self::UpdateFailed => "UPDATE_FAILED",
            Self::DeleteFailed => "DELETE_FAILED",
            Self::InternalError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ValidationError> for ErrorCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::TitleRequired => Self::TitleRequired,
            ValidationError::TitleLength => Self::TitleInvalid,
            ValidationError::ContentRequired => Self::ContentRequired,
            ValidationError::ContentTooShort => Self::ContentInvalid,
            ValidationError::CategoryRequired => Self::CategoryRequired,
            ValidationError::InvalidStatus | ValidationError::InvalidFilterStatus => {
                Self::StatusInvalid
            }
            ValidationError::InvalidId => Self::ValidationError,
        }
    }
}
