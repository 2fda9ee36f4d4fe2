pub mod articles;
pub mod pagination;

pub use articles::{ArticleDto, ArticleListItemDto, CreateArticleRequest, UpdateArticleRequest};
pub use pagination::{Paginated, PaginationMeta};
