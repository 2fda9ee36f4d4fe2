// src/application/commands/articles/mod.rs
//! Create, update and delete. Each usecase validates before it touches the
//! repository and folds storage failures into its own failure kind.
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
