// src/application/error.rs
use crate::domain::{article::ArticleId, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    /// The single business failure of the article service.
    pub fn article_not_found(id: ArticleId) -> Self {
        Self::NotFound(format!("No article found (id: {id})"))
    }
}
