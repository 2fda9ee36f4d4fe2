// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleStatus, NewArticle, value_objects::validate_fields},
        errors::{DomainError, ValidationError},
    },
};
use tracing::{error, info, warn};

/// Article fields supplied by the caller. Identity and timestamps are
/// assigned during creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub category: String,
    pub status: Option<ArticleStatus>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.title, &self.content, &self.category)
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    status: Option<ArticleStatus>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            category: self.category.ok_or("category is required")?,
            status: self.status,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        info!(title = %command.title, "creating new article");

        if let Err(err) = command.validate() {
            warn!(error = %err, "article validation failed");
            return Err(err.into());
        }

        match self.repo.find_by_title(&command.title).await {
            Ok(_) => {
                warn!(title = %command.title, "article with same title already exists");
                return Err(ApplicationError::article_exists());
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => {
                error!(error = %err, "failed to check existing article");
                return Err(ApplicationError::CreateFailed);
            }
        }

        let CreateArticleCommand {
            title,
            content,
            category,
            status,
        } = command;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            category,
            status: status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_article).await.map_err(|err| match err {
            DomainError::Conflict(reason) => {
                warn!(%reason, "storage rejected duplicate title");
                ApplicationError::article_exists()
            }
            other => {
                error!(error = %other, "failed to save article");
                ApplicationError::CreateFailed
            }
        })?;

        info!(id = %created.id, title = %created.title, "article created successfully");
        Ok(created.into())
    }
}
