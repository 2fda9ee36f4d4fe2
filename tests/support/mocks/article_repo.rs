// tests/support/mocks/article_repo.rs
use article_hub::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleRepository, NewArticle,
};
use article_hub::domain::errors::{DomainError, DomainResult};
use article_hub::domain::filter::{Operator, QueryCondition, SortOrder};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoOp {
    Insert,
    List,
    FindByTitle,
    FindById,
    Update,
    Delete,
}

/// Every port call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    Insert(String),
    List,
    FindByTitle(String),
    FindById(i64),
    Update(i64),
    Delete(i64),
}

/// Error to return from an operation instead of touching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    Conflict,
    Storage,
}

impl Failure {
    fn into_error(self) -> DomainError {
        match self {
            Self::NotFound => DomainError::NotFound("article not found".into()),
            Self::Conflict => DomainError::Conflict("title already exists".into()),
            Self::Storage => DomainError::Persistence("connection reset".into()),
        }
    }
}

#[derive(Default)]
struct State {
    articles: BTreeMap<i64, Article>,
    next_id: i64,
    calls: Vec<RepoCall>,
    failures: HashMap<RepoOp, Failure>,
}

/// Repository port backed by a map. Title uniqueness is enforced on insert
/// and update the same way the database constraint does.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    state: Mutex<State>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for article in articles {
                let id = i64::from(article.id);
                state.next_id = state.next_id.max(id);
                state.articles.insert(id, article);
            }
        }
        repo
    }

    pub fn fail_on(&self, op: RepoOp, failure: Failure) {
        self.state.lock().unwrap().failures.insert(op, failure);
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn called(&self, op: RepoOp) -> bool {
        self.calls().iter().any(|call| call.op() == op)
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    fn record(&self, call: RepoCall) -> DomainResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        let op = call.op();
        state.calls.push(call);
        if let Some(failure) = state.failures.get(&op).copied() {
            return Err(failure.into_error());
        }
        Ok(state)
    }
}

impl RepoCall {
    pub fn op(&self) -> RepoOp {
        match self {
            Self::Insert(_) => RepoOp::Insert,
            Self::List => RepoOp::List,
            Self::FindByTitle(_) => RepoOp::FindByTitle,
            Self::FindById(_) => RepoOp::FindById,
            Self::Update(_) => RepoOp::Update,
            Self::Delete(_) => RepoOp::Delete,
        }
    }
}

fn column_value(article: &Article, field: &str) -> String {
    match field {
        "title" => article.title.clone(),
        "category" => article.category.clone(),
        "status" => article.status.to_string(),
        other => panic!("unexpected filter column {other}"),
    }
}

fn matches(article: &Article, condition: &QueryCondition) -> bool {
    let value = column_value(article, condition.field);
    match condition.operator {
        Operator::Eq => value == condition.value,
        Operator::Like => value.contains(condition.value.trim_matches('%')),
    }
}

fn compare(a: &Article, b: &Article, column: &str) -> Ordering {
    let primary = match column {
        "updated_at" => a.updated_at.cmp(&b.updated_at),
        "title" => a.title.cmp(&b.title),
        "category" => a.category.cmp(&b.category),
        "status" => a.status.as_str().cmp(b.status.as_str()),
        "id" => Ordering::Equal,
        _ => a.created_at.cmp(&b.created_at),
    };
    primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.record(RepoCall::Insert(article.title.clone()))?;
        if state.articles.values().any(|a| a.title == article.title) {
            return Err(Failure::Conflict.into_error());
        }

        state.next_id += 1;
        let id = state.next_id;
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            category: article.category,
            status: article.status,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        state.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn list(&self, filter: &ArticleFilter) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.record(RepoCall::List)?;
        let conditions = filter.build_query_conditions();

        let mut matching: Vec<Article> = state
            .articles
            .values()
            .filter(|article| conditions.iter().all(|c| matches(article, c)))
            .cloned()
            .collect();

        let column = filter.sort_column();
        matching.sort_by(|a, b| compare(a, b, column));
        if filter.normalized_sort_order() == SortOrder::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let offset = usize::try_from(filter.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(filter.normalized_limit()).unwrap_or(usize::MAX);
        let page = matching.into_iter().skip(offset).take(limit).collect();
        Ok((page, total))
    }

    async fn find_by_title(&self, title: &str) -> DomainResult<Article> {
        let state = self.record(RepoCall::FindByTitle(title.to_string()))?;
        state
            .articles
            .values()
            .find(|article| article.title == title)
            .cloned()
            .ok_or_else(|| Failure::NotFound.into_error())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let state = self.record(RepoCall::FindById(id.into()))?;
        state
            .articles
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| Failure::NotFound.into_error())
    }

    async fn update(&self, id: ArticleId, article: &Article) -> DomainResult<()> {
        let mut state = self.record(RepoCall::Update(id.into()))?;
        let key = i64::from(id);
        if state
            .articles
            .iter()
            .any(|(other, a)| *other != key && a.title == article.title)
        {
            return Err(Failure::Conflict.into_error());
        }
        match state.articles.get_mut(&key) {
            Some(slot) => {
                *slot = article.clone();
                Ok(())
            }
            None => Err(Failure::NotFound.into_error()),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.record(RepoCall::Delete(id.into()))?;
        state
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| Failure::NotFound.into_error())
    }
}
