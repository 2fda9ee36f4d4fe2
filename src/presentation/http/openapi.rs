// src/presentation/http/openapi.rs
use crate::application::{
    ErrorCode,
    dto::{ArticleDto, ArticleListItemDto, PaginationMeta},
};
use crate::presentation::http::response::{ErrorResponse, ResponseStatus};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    /// Server time, RFC 3339.
    pub time: String,
}

/// Success envelope carrying a single article.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleEnvelope {
    pub status: ResponseStatus,
    pub message: String,
    pub data: ArticleDto,
    pub timestamp: DateTime<Utc>,
    pub path: Option<String>,
}

/// Paginated envelope for article listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListEnvelope {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Vec<ArticleListItemDto>,
    pub pagination: PaginationMeta,
    pub timestamp: DateTime<Utc>,
    pub path: Option<String>,
}

/// Success envelope whose `data` is always null.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmptyEnvelope {
    pub status: ResponseStatus,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: (),
    pub timestamp: DateTime<Utc>,
    pub path: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::system::root,
        crate::presentation::http::controllers::system::health
    ),
    components(
        schemas(
            StatusResponse,
            RootResponse,
            ArticleEnvelope,
            ArticleListEnvelope,
            EmptyEnvelope,
            ErrorResponse,
            ErrorCode,
            ResponseStatus,
            PaginationMeta,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListItemDto,
            crate::application::dto::CreateArticleRequest,
            crate::application::dto::UpdateArticleRequest
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article Hub API",
        description = "Article lifecycle service"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the document served at `/openapi.json`.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
