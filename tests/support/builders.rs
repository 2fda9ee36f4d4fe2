// tests/support/builders.rs
use super::mocks::fixed_now;
use article_hub::application::commands::articles::CreateArticleCommand;
use article_hub::domain::article::{Article, ArticleId, ArticleStatus};
use chrono::{DateTime, Duration, Utc};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: ArticleStatus,
    created_at: DateTime<Utc>,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Body long enough to pass validation".into(),
            category: "news".into(),
            status: ArticleStatus::Draft,
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(self) -> Self {
        self.status(ArticleStatus::Publish)
    }

    /// Shifts the creation time relative to the fixed clock.
    pub fn created_minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: self.title,
            content: self.content,
            category: self.category,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn create_command(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .content("Body long enough to pass validation")
        .category("news")
        .build()
        .unwrap()
}
