// src/domain/filter.rs
//! Pagination, sorting and search shared by every list-style query.
//!
//! `Filter<F>` owns the entity-agnostic knobs; `F` contributes the
//! entity-specific equality filters through [`FilterFields`]. Normalisation
//! never fails: out-of-range pages and limits are corrected in place. Only
//! `F::validate` may reject a filter.

use crate::domain::errors::ValidationError;
use std::fmt;

/// Defaults applied when a list request leaves a knob unset or out of range.
pub struct PaginationDefaults;

impl PaginationDefaults {
    pub const PAGE: i64 = 1;
    pub const LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;
    pub const SORT_BY: &'static str = "created_at";
    pub const SORT_ORDER: SortOrder = SortOrder::Desc;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Case-insensitive; anything other than `asc` sorts descending.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Like,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Like => "LIKE",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `field operator value` predicate. `field` is always a static column
/// name chosen by code, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCondition {
    pub field: &'static str,
    pub operator: Operator,
    pub value: String,
}

impl QueryCondition {
    pub fn eq(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            operator: Operator::Eq,
            value: value.into(),
        }
    }

    /// Substring match, wildcarded on both sides.
    pub fn contains(field: &'static str, term: &str) -> Self {
        Self {
            field,
            operator: Operator::Like,
            value: format!("%{term}%"),
        }
    }
}

/// Entity-specific part of a [`Filter`].
pub trait FilterFields {
    /// Column the free-text search term is matched against.
    const SEARCH_FIELD: &'static str;
    /// Columns callers may sort by. The first entry is the fallback.
    const SORTABLE_FIELDS: &'static [&'static str];

    fn validate(&self) -> Result<(), ValidationError>;

    /// Equality conditions for every populated field, in declaration order.
    fn equality_conditions(&self) -> Vec<QueryCondition>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    pub page: i64,
    pub limit: i64,
    pub sort_by: String,
    pub sort_order: String,
    pub search: String,
    pub fields: F,
}

impl<F: Default> Default for Filter<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F> Filter<F> {
    pub fn new(fields: F) -> Self {
        Self {
            page: PaginationDefaults::PAGE,
            limit: PaginationDefaults::LIMIT,
            sort_by: PaginationDefaults::SORT_BY.to_string(),
            sort_order: PaginationDefaults::SORT_ORDER.as_str().to_string(),
            search: String::new(),
            fields,
        }
    }

    pub fn normalized_page(&self) -> i64 {
        if self.page < 1 {
            PaginationDefaults::PAGE
        } else {
            self.page
        }
    }

    pub fn normalized_limit(&self) -> i64 {
        if self.limit < 1 {
            PaginationDefaults::LIMIT
        } else {
            self.limit.min(PaginationDefaults::MAX_LIMIT)
        }
    }

    pub fn normalized_sort_order(&self) -> SortOrder {
        SortOrder::parse(&self.sort_order)
    }

    pub fn sort_by(&self) -> &str {
        match self.sort_by.trim() {
            "" => PaginationDefaults::SORT_BY,
            trimmed => trimmed,
        }
    }

    pub fn search(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|term| !term.is_empty())
    }

    pub fn offset(&self) -> i64 {
        (self.normalized_page() - 1).saturating_mul(self.normalized_limit())
    }

    /// Rewrites page and limit to their normalised values.
    pub fn normalize_pagination(&mut self) {
        self.page = self.normalized_page();
        self.limit = self.normalized_limit();
    }
}

impl<F: FilterFields> Filter<F> {
    /// Normalises pagination first, then checks the entity fields. A failure
    /// still leaves page and limit corrected.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.normalize_pagination();
        self.fields.validate()
    }

    /// Sort column safe to hand to storage: the requested one when it is
    /// sortable, otherwise the entity's fallback column.
    pub fn sort_column(&self) -> &'static str {
        let requested = self.sort_by();
        F::SORTABLE_FIELDS
            .iter()
            .copied()
            .find(|column| *column == requested)
            .or_else(|| F::SORTABLE_FIELDS.first().copied())
            .unwrap_or(PaginationDefaults::SORT_BY)
    }

    /// Equality filters in declaration order, then the search condition.
    pub fn build_query_conditions(&self) -> Vec<QueryCondition> {
        let mut conditions = self.fields.equality_conditions();
        if let Some(term) = self.search() {
            conditions.push(QueryCondition::contains(F::SEARCH_FIELD, term));
        }
        conditions
    }
}
