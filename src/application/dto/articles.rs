use crate::application::commands::articles::CreateArticleCommand;
use crate::domain::article::{
    Article, ArticleStatus, ArticleUpdate,
    value_objects::{validate_category, validate_content, validate_title},
};
use crate::domain::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full projection returned by create, detail and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status.to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Listing projection; omits the article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleListItemDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleListItemDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            category: article.category,
            status: article.status.to_string(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Create payload. `null`, absent and empty fields are all treated as empty.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Defaults to `Draft` when null, empty or absent.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateArticleRequest {
    /// Checks title, content, category and status in that order and stops at
    /// the first violation.
    pub fn into_command(self) -> Result<CreateArticleCommand, ValidationError> {
        let title = self.title.unwrap_or_default();
        let content = self.content.unwrap_or_default();
        let category = self.category.unwrap_or_default();

        validate_title(&title)?;
        validate_content(&content)?;
        validate_category(&category)?;
        let status = supplied(self.status.as_ref())
            .map(str::parse::<ArticleStatus>)
            .transpose()?;

        Ok(CreateArticleCommand {
            title,
            content,
            category,
            status,
        })
    }
}

/// Partial update payload. Absent and empty fields are both "not supplied".
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

fn supplied(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

impl UpdateArticleRequest {
    /// Applies the create rules to supplied fields only.
    pub fn validate(&self) -> Result<ArticleUpdate, ValidationError> {
        let mut update = ArticleUpdate::default();

        if let Some(title) = supplied(self.title.as_ref()) {
            validate_title(title)?;
            update = update.with_title(title);
        }
        if let Some(content) = supplied(self.content.as_ref()) {
            validate_content(content)?;
            update = update.with_content(content);
        }
        if let Some(category) = supplied(self.category.as_ref()) {
            update = update.with_category(category);
        }
        if let Some(status) = supplied(self.status.as_ref()) {
            update = update.with_status(status.parse()?);
        }

        Ok(update)
    }
}
