use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, Paginated, PaginationMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleFilter,
};
use tracing::{error, info, warn};

pub struct ListArticlesQuery {
    pub filter: ArticleFilter,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleListItemDto>> {
        let mut filter = query.filter;
        info!(
            page = filter.normalized_page(),
            limit = filter.normalized_limit(),
            category = filter.fields.category(),
            status = filter.fields.status(),
            "getting article list"
        );

        if let Err(err) = filter.validate() {
            warn!(error = %err, "filter validation failed");
            return Err(err.into());
        }

        let (articles, total) = self.repo.list(&filter).await.map_err(|err| {
            error!(error = %err, "failed to get articles from repository");
            ApplicationError::ListFailed
        })?;

        info!(count = articles.len(), total, "articles retrieved successfully");

        let pagination = PaginationMeta::new(
            filter.normalized_page().unsigned_abs(),
            filter.normalized_limit().unsigned_abs(),
            total,
        );
        let items = articles.into_iter().map(Into::into).collect();
        Ok(Paginated::new(items, pagination))
    }
}
