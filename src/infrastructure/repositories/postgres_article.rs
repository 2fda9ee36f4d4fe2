// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::filter::QueryCondition;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

const ARTICLE_COLUMNS: &str = "id, title, content, category, status, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            content: row.content,
            category: row.category,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Appends the conditions in order as `WHERE a AND b ...`. Field names come
/// from code; values are always bound.
fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, conditions: &[QueryCondition]) {
    for (index, condition) in conditions.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });
        builder.push(condition.field);
        builder.push(" ");
        builder.push(condition.operator.as_str());
        builder.push(" ");
        builder.push_bind(condition.value.clone());
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            category,
            status,
            created_at,
            updated_at,
        } = article;
        debug!(%title, "repository: creating article");

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, category, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(category)
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let created = Article::try_from(row)?;
        debug!(id = %created.id, "repository: article created");
        Ok(created)
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)> {
        let conditions = filter.build_query_conditions();
        debug!(
            page = filter.normalized_page(),
            limit = filter.normalized_limit(),
            conditions = conditions.len(),
            "repository: getting article list"
        );

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        push_conditions(&mut count_builder, &conditions);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let order = filter.normalized_sort_order().as_str();
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        push_conditions(&mut builder, &conditions);
        builder.push(format!(
            " ORDER BY {} {order}, id {order}",
            filter.sort_column()
        ));
        builder.push(" LIMIT ");
        builder.push_bind(filter.normalized_limit());
        builder.push(" OFFSET ");
        builder.push_bind(filter.offset());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = articles.len(), total, "repository: articles retrieved");
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Article> {
        debug!(title, "repository: getting article by title");
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE title = $1"
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        debug!(%id, "repository: getting article by id");
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }

    async fn update(&self, id: ArticleId, article: &Article) -> DomainResult<()> {
        debug!(%id, "repository: updating article");
        let result = sqlx::query(
            "UPDATE articles
             SET title = $1, content = $2, category = $3, status = $4, updated_at = $5
             WHERE id = $6",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.category)
        .bind(article.status.as_str())
        .bind(article.updated_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        debug!(%id, "repository: deleting article");
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}
