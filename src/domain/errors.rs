// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Field-level rule violations. Each variant is user-correctable and carries
/// its own machine code at the application boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,
    #[error("title must be between 3 and 200 characters")]
    TitleLength,
    #[error("content is required")]
    ContentRequired,
    #[error("content must be at least 10 characters")]
    ContentTooShort,
    #[error("category is required")]
    CategoryRequired,
    #[error("invalid status, must be one of: Publish, Draft, Trash")]
    InvalidStatus,
    #[error("invalid filter status")]
    InvalidFilterStatus,
    #[error("article id must be positive")]
    InvalidId,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
