use crate::domain::article::{Article, ArticlePatch, AuthorId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub author_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            body: article.body,
            author_id: article.author_id.map(Into::into),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Request body for creating an article. Only `title` is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    pub title: String,
    pub body: Option<String>,
    pub author_id: Option<i64>,
}

impl From<CreateArticle> for Article {
    fn from(request: CreateArticle) -> Self {
        Self::new(
            request.title,
            request.body,
            request.author_id.map(AuthorId::from),
        )
    }
}

/// Request body for a partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author_id: Option<i64>,
}

impl From<UpdateArticle> for ArticlePatch {
    fn from(request: UpdateArticle) -> Self {
        Self {
            title: request.title,
            body: request.body,
            author_id: request.author_id.map(AuthorId::from),
        }
    }
}
