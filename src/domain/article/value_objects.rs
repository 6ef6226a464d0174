use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Surrogate key of an article. `0` marks an article the store has not seen yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub const UNSAVED: Self = Self(0);

    /// Identifier of a row that already exists in the store.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "persisted article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    pub const fn is_unsaved(self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an author managed outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(pub i64);

impl From<i64> for AuthorId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}
