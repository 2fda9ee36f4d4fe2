use crate::domain::errors::ValidationError;
use std::{fmt, str::FromStr};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            Err(ValidationError::InvalidId)
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of lifecycle states. Any state may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    Publish,
    #[default]
    Draft,
    Trash,
}

impl ArticleStatus {
    pub const ALL: [Self; 3] = [Self::Publish, Self::Draft, Self::Trash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "Publish",
            Self::Draft => "Draft",
            Self::Trash => "Trash",
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or(ValidationError::InvalidStatus)
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    let chars = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::TitleLength);
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    if content.chars().count() < CONTENT_MIN_CHARS {
        return Err(ValidationError::ContentTooShort);
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::CategoryRequired);
    }
    Ok(())
}

/// Title, content and category rules, fail-fast in that order.
pub fn validate_fields(title: &str, content: &str, category: &str) -> Result<(), ValidationError> {
    validate_title(title)?;
    validate_content(content)?;
    validate_category(category)
}
