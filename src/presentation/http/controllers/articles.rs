// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleListItemDto, CreateArticleRequest, UpdateArticleRequest},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::{ArticleFilter, ArticleFilterFields};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::response::{PaginatedResponse, SuccessResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        OriginalUri, Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, de};
use std::{fmt, str::FromStr};
use tracing::warn;
use utoipa::IntoParams;

const CREATE_FIELD: &str = "create_article";
const UPDATE_FIELD: &str = "update_article";

/// Query string accepted by the article listing. Unset knobs fall back to
/// the pagination defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    /// Page size, capped at 100.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i64>,
    /// One of `created_at`, `updated_at`, `title`, `category`, `status`, `id`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sort_order: Option<String>,
    /// Substring matched against the title.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub search: Option<String>,
    pub category: Option<String>,
    /// One of `Publish`, `Draft`, `Trash`.
    pub status: Option<String>,
}

/// `?page=` is treated like an absent `page`; anything else must parse.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

impl From<ArticleListParams> for ArticleFilter {
    fn from(params: ArticleListParams) -> Self {
        let mut filter = ArticleFilter::new(ArticleFilterFields {
            category: params.category,
            status: params.status,
        });
        if let Some(page) = params.page {
            filter.page = page;
        }
        if let Some(limit) = params.limit {
            filter.limit = limit;
        }
        if let Some(sort_by) = params.sort_by {
            filter.sort_by = sort_by;
        }
        if let Some(sort_order) = params.sort_order {
            filter.sort_order = sort_order;
        }
        if let Some(search) = params.search {
            filter.search = search;
        }
        filter
    }
}

fn article_id(path: Result<Path<i64>, PathRejection>, uri: &str) -> HttpResult<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        warn!(error = %rejection, "invalid article id format");
        HttpError::bad_request("Invalid article ID format").with_path(uri)
    })
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>, uri: &str) -> HttpResult<T> {
    body.map(|Json(payload)| payload).map_err(|rejection| {
        warn!(error = %rejection, "failed to parse request body");
        HttpError::bad_request("Invalid request body").with_path(uri)
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/article",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles.", body = crate::presentation::http::openapi::ArticleListEnvelope),
        (status = 400, description = "Invalid query parameters or filter.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<ArticleListParams>, QueryRejection>,
) -> HttpResult<Json<PaginatedResponse<ArticleListItemDto>>> {
    let path = uri.path();
    let Query(params) = query.map_err(|rejection| {
        warn!(error = %rejection, "failed to parse query parameters");
        HttpError::bad_request("Invalid query parameters").with_path(path)
    })?;

    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            filter: params.into(),
        })
        .await
        .into_http()
        .map_err(|err| err.with_path(path))?;

    Ok(Json(
        PaginatedResponse::new(page, "Articles retrieved successfully").with_path(path),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/article",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::response::ErrorResponse),
        (status = 409, description = "Title already in use.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<SuccessResponse<ArticleDto>>)> {
    let path = uri.path();
    let request = json_body(body, path)?;

    let command = request.into_command().map_err(|err| {
        warn!(error = %err, "validation error on create article");
        HttpError::from_error(err.into())
            .with_field(CREATE_FIELD)
            .with_path(path)
    })?;

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map_err(|err| err.with_field(CREATE_FIELD).with_path(path))?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(article, "Article created successfully").with_path(path)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/article/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<SuccessResponse<ArticleDto>>> {
    let path = uri.path();
    let id = article_id(id, path)?;

    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map_err(|err| err.with_path(path))?;

    Ok(Json(
        SuccessResponse::new(article, "Article retrieved successfully").with_path(path),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/article/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "The updated article.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::response::ErrorResponse),
        (status = 409, description = "Title already in use.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<SuccessResponse<ArticleDto>>> {
    let path = uri.path();
    let id = article_id(id, path)?;
    let changes = json_body(body, path)?;

    let article = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand { id, changes })
        .await
        .into_http()
        .map_err(|err| err.with_field(UPDATE_FIELD).with_path(path))?;

    Ok(Json(
        SuccessResponse::new(article, "Article updated successfully").with_path(path),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/article/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = crate::presentation::http::openapi::EmptyEnvelope),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::response::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::response::ErrorResponse),
        (status = 500, description = "Storage failure.", body = crate::presentation::http::response::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<SuccessResponse<()>>> {
    let path = uri.path();
    let id = article_id(id, path)?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map_err(|err| err.with_path(path))?;

    Ok(Json(
        SuccessResponse::new((), "Article deleted successfully").with_path(path),
    ))
}
