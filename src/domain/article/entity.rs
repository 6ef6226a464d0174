// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, AuthorId};
use chrono::{DateTime, Utc};
use std::hash::{Hash, Hasher};

/// A blog-style post. Two articles are the same article when their ids match.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: Option<String>,
    pub author_id: Option<AuthorId>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// A fresh article; id and timestamps are filled in by the store on save.
    pub fn new(title: impl Into<String>, body: Option<String>, author_id: Option<AuthorId>) -> Self {
        Self {
            id: ArticleId::UNSAVED,
            title: title.into(),
            body,
            author_id,
            created_at: None,
            updated_at: None,
        }
    }

    pub const fn is_new(&self) -> bool {
        self.id.is_unsaved()
    }

    /// Overwrite every field present in `patch`, leave the rest alone.
    pub fn apply(&mut self, patch: ArticlePatch) {
        let ArticlePatch {
            title,
            body,
            author_id,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = Some(body);
        }
        if let Some(author_id) = author_id {
            self.author_id = Some(author_id);
        }
    }

    /// Audit stamping performed on every persistence. `created_at` is only set once.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let created_at = *self.created_at.get_or_insert(now);
        self.updated_at = Some(now.max(created_at));
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Partial update of an article.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<AuthorId>,
}
