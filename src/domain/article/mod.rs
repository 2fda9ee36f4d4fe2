pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use filter::{ArticleFilter, ArticleFilterFields};
pub use repository::ArticleRepository;
pub use value_objects::{ArticleId, ArticleStatus};
