// src/application/articles.rs
use crate::{
    application::{
        dto::{ArticleDto, CreateArticle, UpdateArticle},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleRepository, ArticleTransaction},
};
use futures::{
    StreamExt, TryStreamExt,
    stream::{self, BoxStream},
};
use std::sync::Arc;

/// Lazily evaluated listing: the store is queried on first poll.
pub type ArticleStream = BoxStream<'static, ApplicationResult<ArticleDto>>;

pub struct ArticleService {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(id);
        let mut tx = self.repo.begin().await?;
        let result = find_existing(tx.as_mut(), id).await;
        settle(tx, result).await.map(ArticleDto::from)
    }

    /// Every article, or only those whose title contains `title` when it is non-empty.
    pub fn get_all(&self, title: Option<String>) -> ArticleStream {
        let repo = Arc::clone(&self.repo);
        stream::once(fetch_all(repo, title.filter(|t| !t.is_empty())))
            .map_ok(|articles| {
                stream::iter(
                    articles
                        .into_iter()
                        .map(|article| Ok::<_, ApplicationError>(ArticleDto::from(article))),
                )
            })
            .try_flatten()
            .boxed()
    }

    pub async fn create(&self, request: CreateArticle) -> ApplicationResult<ArticleDto> {
        let mut tx = self.repo.begin().await?;
        let result = tx
            .save(Article::from(request))
            .await
            .map_err(ApplicationError::from);
        let created = settle(tx, result).await?;
        tracing::debug!(article_id = %created.id, "article created");
        Ok(created.into())
    }

    pub async fn update(&self, id: i64, request: UpdateArticle) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(id);
        let mut tx = self.repo.begin().await?;
        let result = apply_update(tx.as_mut(), id, request).await;
        let updated = settle(tx, result).await?;
        tracing::debug!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        let id = ArticleId::from(id);
        let mut tx = self.repo.begin().await?;
        let result = tx.delete_by_id(id).await.map_err(ApplicationError::from);
        settle(tx, result).await?;
        tracing::debug!(article_id = %id, "article deleted");
        Ok(())
    }
}

async fn find_existing(tx: &mut dyn ArticleTransaction, id: ArticleId) -> ApplicationResult<Article> {
    tx.find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::article_not_found(id))
}

async fn apply_update(
    tx: &mut dyn ArticleTransaction,
    id: ArticleId,
    request: UpdateArticle,
) -> ApplicationResult<Article> {
    let mut article = find_existing(tx, id).await?;
    article.apply(request.into());
    Ok(tx.save(article).await?)
}

async fn fetch_all(
    repo: Arc<dyn ArticleRepository>,
    title: Option<String>,
) -> ApplicationResult<Vec<Article>> {
    let mut tx = repo.begin().await?;
    let result = match title.as_deref() {
        Some(needle) => tx.find_all_by_title_contains(needle).await,
        None => tx.find_all().await,
    };
    settle(tx, result.map_err(ApplicationError::from)).await
}

/// Commit on success, roll back on failure. The original error wins over a failed rollback.
async fn settle<T>(
    tx: Box<dyn ArticleTransaction>,
    result: ApplicationResult<T>,
) -> ApplicationResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
