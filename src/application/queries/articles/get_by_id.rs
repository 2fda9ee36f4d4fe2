use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use tracing::{info, warn};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Every lookup failure surfaces as not found; storage trouble is only
    /// visible in the logs.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        info!(id = query.id, "getting article detail");
        let id = ArticleId::new(query.id)?;

        let article = self.repo.find_by_id(id).await.map_err(|err| {
            warn!(%id, error = %err, "article not found");
            ApplicationError::article_not_found()
        })?;

        info!(%id, "article detail retrieved successfully");
        Ok(article.into())
    }
}
