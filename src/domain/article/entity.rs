// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, validate_fields};
use crate::domain::errors::ValidationError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Checks title, content and category in that order; the status is
    /// already a member of the closed set by construction.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, &self.content, &self.category)
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Publish
    }

    pub fn is_draft(&self) -> bool {
        self.status == ArticleStatus::Draft
    }

    pub fn is_in_trash(&self) -> bool {
        self.status == ArticleStatus::Trash
    }

    /// Overwrites every field present in `update` and stamps `updated_at`.
    /// `created_at` is never touched.
    pub fn apply_update(&mut self, update: ArticleUpdate, now: DateTime<Utc>) {
        let ArticleUpdate {
            title,
            content,
            category,
            status,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(status) = status {
            self.status = status;
        }
        self.updated_at = now;
    }
}

/// A fully formed article that storage has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse set of overwrites. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<ArticleStatus>,
}

impl ArticleUpdate {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }
}
