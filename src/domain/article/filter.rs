use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::errors::ValidationError;
use crate::domain::filter::{Filter, FilterFields, QueryCondition};

pub type ArticleFilter = Filter<ArticleFilterFields>;

/// Exact-match filters for article listings. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilterFields {
    pub category: Option<String>,
    pub status: Option<String>,
}

impl ArticleFilterFields {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|value| !value.is_empty())
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|value| !value.is_empty())
    }
}

impl FilterFields for ArticleFilterFields {
    const SEARCH_FIELD: &'static str = "title";
    const SORTABLE_FIELDS: &'static [&'static str] =
        &["created_at", "updated_at", "title", "category", "status", "id"];

    fn validate(&self) -> Result<(), ValidationError> {
        match self.status() {
            Some(status) => status
                .parse::<ArticleStatus>()
                .map(|_| ())
                .map_err(|_| ValidationError::InvalidFilterStatus),
            None => Ok(()),
        }
    }

    fn equality_conditions(&self) -> Vec<QueryCondition> {
        let mut conditions = Vec::with_capacity(2);
        if let Some(category) = self.category() {
            conditions.push(QueryCondition::eq("category", category));
        }
        if let Some(status) = self.status() {
            conditions.push(QueryCondition::eq("status", status));
        }
        conditions
    }
}
