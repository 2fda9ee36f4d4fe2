use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage port for articles. Implementations must report a missing row as
/// `DomainError::NotFound` and a broken title uniqueness constraint as
/// `DomainError::Conflict`; every call is expected to be atomic on its own.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// One page of matches plus the size of the unpaginated match set.
    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)>;
    async fn find_by_title(&self, title: &str) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article>;
    async fn update(&self, id: ArticleId, article: &Article) -> DomainResult<()>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
