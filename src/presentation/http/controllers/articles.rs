// src/presentation/http/controllers/articles.rs
use crate::application::dto::{ArticleDto, CreateArticle, UpdateArticle};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use futures::TryStreamExt;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Case-sensitive substring the title must contain. Empty means no filter.
    #[serde(default)]
    pub title: Option<String>,
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state.services.articles.get(id).await.into_http().map(Json)
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Matching articles in store order.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    let articles = state
        .services
        .articles
        .get_all(params.title)
        .try_collect::<Vec<_>>()
        .await
        .into_http()?;

    Ok(Json(articles))
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticle,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Malformed request body.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticle>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let created = state.services.articles.create(payload).await.into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticle,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Malformed request body.", body = ErrorResponse),
        (status = 404, description = "No article with that id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateArticle>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .articles
        .update(id, payload)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article removed, or it never existed.")
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<StatusCode> {
    state.services.articles.delete(id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
