use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, UpdateArticleRequest},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleUpdate},
        errors::DomainError,
    },
};
use tracing::{error, info, warn};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub changes: UpdateArticleRequest,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        info!(id = command.id, "updating article");

        let update = command.changes.validate().map_err(|err| {
            warn!(error = %err, "update request validation failed");
            ApplicationError::from(err)
        })?;
        let id = ArticleId::new(command.id)?;

        let mut article = self.repo.find_by_id(id).await.map_err(|err| {
            if err.is_not_found() {
                warn!(%id, "article not found for update");
                ApplicationError::article_not_found()
            } else {
                error!(%id, error = %err, "failed to load article for update");
                ApplicationError::UpdateFailed
            }
        })?;

        self.ensure_title_available(id, &update).await?;

        article.apply_update(update, self.clock.now());

        self.repo.update(id, &article).await.map_err(|err| match err {
            DomainError::Conflict(_) => {
                warn!(%id, "storage rejected duplicate title");
                ApplicationError::article_exists()
            }
            DomainError::NotFound(_) => ApplicationError::article_not_found(),
            other => {
                error!(%id, error = %other, "failed to update article");
                ApplicationError::UpdateFailed
            }
        })?;

        info!(%id, "article updated successfully");
        Ok(article.into())
    }

    /// A new title may only belong to the article being updated.
    async fn ensure_title_available(
        &self,
        id: ArticleId,
        update: &ArticleUpdate,
    ) -> ApplicationResult<()> {
        let Some(title) = update.title.as_deref() else {
            return Ok(());
        };

        match self.repo.find_by_title(title).await {
            Ok(existing) if existing.id != id => {
                warn!(title, "title already exists");
                Err(ApplicationError::article_exists())
            }
            Ok(_) => Ok(()),
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => {
                error!(error = %err, "failed to check title availability");
                Err(ApplicationError::UpdateFailed)
            }
        }
    }
}
