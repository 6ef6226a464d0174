use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Entry point to article persistence. Every unit of work runs in its own transaction.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>>;
}

/// Operations available inside a store transaction.
///
/// Dropping a transaction without calling [`ArticleTransaction::commit`] discards
/// its writes.
#[async_trait]
pub trait ArticleTransaction: Send {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_all(&mut self) -> DomainResult<Vec<Article>>;
    /// Case-sensitive substring match on the title.
    async fn find_all_by_title_contains(&mut self, needle: &str) -> DomainResult<Vec<Article>>;
    /// Inserts unsaved articles and updates persisted ones, stamping the audit timestamps.
    async fn save(&mut self, article: Article) -> DomainResult<Article>;
    /// Succeeds whether or not a row with `id` exists.
    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()>;
    async fn count(&mut self) -> DomainResult<i64>;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
    async fn rollback(self: Box<Self>) -> DomainResult<()>;
}
