// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::article::ArticleRepository};

/// Write-side article usecases. Stateless between calls: everything lives in
/// the repository.
pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
