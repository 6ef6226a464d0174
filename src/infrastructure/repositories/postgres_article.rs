// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::application::ports::ClockPort;
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleTransaction, AuthorId,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, body, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    clock: Arc<ClockPort>,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, clock: Arc<ClockPort>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn begin(&self) -> DomainResult<Box<dyn ArticleTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresArticleTransaction {
            tx,
            clock: Arc::clone(&self.clock),
        }))
    }
}

struct PostgresArticleTransaction {
    tx: Transaction<'static, Postgres>,
    clock: Arc<ClockPort>,
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: Option<String>,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: row.title,
            body: row.body,
            author_id: row.author_id.map(AuthorId::from),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

fn into_articles(rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    rows.into_iter().map(Article::try_from).collect()
}

impl PostgresArticleTransaction {
    async fn insert(&mut self, article: Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&article.title)
        .bind(article.body.as_deref())
        .bind(article.author_id.map(i64::from))
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&mut self, article: Article) -> DomainResult<Article> {
        // created_at is never rewritten once the row exists.
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = $1, body = $2, author_id = $3, updated_at = GREATEST($4, created_at)
             WHERE id = $5
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(&article.title)
        .bind(article.body.as_deref())
        .bind(article.author_id.map(i64::from))
        .bind(article.updated_at)
        .bind(i64::from(article.id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map_or_else(
            || {
                Err(DomainError::NotFound(format!(
                    "article {} no longer exists",
                    article.id
                )))
            },
            Article::try_from,
        )
    }
}

#[async_trait]
impl ArticleTransaction for PostgresArticleTransaction {
    async fn find_by_id(&mut self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&mut self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!("SELECT {ARTICLE_COLUMNS} FROM articles"))
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn find_all_by_title_contains(&mut self, needle: &str) -> DomainResult<Vec<Article>> {
        // strpos compares bytes, so the match is case-sensitive and needs no LIKE escaping.
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE strpos(title, $1) > 0"
        ))
        .bind(needle)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        into_articles(rows)
    }

    async fn save(&mut self, mut article: Article) -> DomainResult<Article> {
        article.touch(self.clock.now());
        if article.is_new() {
            self.insert(article).await
        } else {
            self.update(article).await
        }
    }

    async fn delete_by_id(&mut self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count(&mut self) -> DomainResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx)
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        let Self { tx, .. } = *self;
        tx.commit().await.map_err(map_sqlx)
    }

    async fn rollback(self: Box<Self>) -> DomainResult<()> {
        let Self { tx, .. } = *self;
        tx.rollback().await.map_err(map_sqlx)
    }
}
