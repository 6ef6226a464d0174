// tests/support/mocks/article_repo.rs
use article_crud::application::ports::time::Clock;
use article_crud::domain::article::{Article, ArticleId, ArticleRepository, ArticleTransaction};
use article_crud::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::time::StepClock;

#[derive(Debug, Clone, Default)]
struct StoreState {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

#[derive(Default)]
struct Counters {
    fail_saves: AtomicBool,
    begins: AtomicUsize,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
}

/// Store that keeps rows in memory. A transaction works on a private copy which
/// replaces the shared state on commit.
#[derive(Clone)]
pub struct InMemoryArticleRepo {
    state: Arc<Mutex<StoreState>>,
    clock: Arc<dyn Clock>,
    counters: Arc<Counters>,
}

impl Default for InMemoryArticleRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
            clock: Arc::new(StepClock::default()),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Make every subsequent `save` fail with a persistence error.
    pub fn fail_saves(&self, fail: bool) {
        self.counters.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn begins(&self) -> usize {
        self.counters.begins.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.counters.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.counters.rollbacks.load(Ordering::SeqCst)
    }

    pub fn row_count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn stored(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().rows.get(&id).cloned()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        self.counters.begins.fetch_add(1, Ordering::SeqCst);
        let working = self.state.lock().unwrap().clone();
        Ok(Box::new(InMemoryTransaction {
            repo: self.clone(),
            working,
        }))
    }
}

struct InMemoryTransaction {
    repo: InMemoryArticleRepo,
    working: StoreState,
}

#[async_trait]
impl ArticleTransaction for InMemoryTransaction {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.working.rows.get(&i64::from(id)).cloned())
    }

    async fn find_all(&mut self) -> DomainResult<Vec<Article>> {
        Ok(self.working.rows.values().cloned().collect())
    }

    async fn find_all_by_title_contains(&mut self, needle: &str) -> DomainResult<Vec<Article>> {
        Ok(self
            .working
            .rows
            .values()
            .filter(|article| article.title.contains(needle))
            .cloned()
            .collect())
    }

    async fn save(&mut self, mut article: Article) -> DomainResult<Article> {
        if self.repo.counters.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("injected save failure".into()));
        }

        if article.is_new() {
            self.working.last_id += 1;
            article.id = ArticleId(self.working.last_id);
        } else if !self.working.rows.contains_key(&i64::from(article.id)) {
            return Err(DomainError::NotFound(format!(
                "article {} no longer exists",
                article.id
            )));
        }

        article.touch(self.repo.clock.now());
        self.working
            .rows
            .insert(i64::from(article.id), article.clone());
        Ok(article)
    }

    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()> {
        self.working.rows.remove(&i64::from(id));
        Ok(())
    }

    async fn count(&mut self) -> DomainResult<i64> {
        Ok(i64::try_from(self.working.rows.len()).unwrap())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let Self { repo, working } = *self;
        *repo.state.lock().unwrap() = working;
        repo.counters.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        self.repo.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
