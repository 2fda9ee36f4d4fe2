use crate::domain::errors::{DomainError, ValidationError};

const CNT_ARTICLE_TITLE: &str = "articles_title_key";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("article not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE => DomainError::Conflict("title already exists".into()),
                    CNT_ARTICLE_STATUS_CHECK => ValidationError::InvalidStatus.into(),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Persistence("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
