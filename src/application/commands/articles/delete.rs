// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};
use tracing::{error, info, warn};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Deletes only after confirming the article exists, so a missing id is
    /// reported as not found instead of a silent no-op.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        info!(id = command.id, "deleting article");
        let id = ArticleId::new(command.id)?;

        let article = self.repo.find_by_id(id).await.map_err(|err| {
            if err.is_not_found() {
                warn!(%id, "article not found for delete");
                ApplicationError::article_not_found()
            } else {
                error!(%id, error = %err, "failed to load article for delete");
                ApplicationError::DeleteFailed
            }
        })?;

        self.repo.delete(id).await.map_err(|err| {
            error!(%id, error = %err, "failed to delete article");
            ApplicationError::DeleteFailed
        })?;

        info!(%id, title = %article.title, "article deleted successfully");
        Ok(())
    }
}
