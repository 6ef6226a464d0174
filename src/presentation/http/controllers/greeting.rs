use axum::extract::Query;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelloParams {
    #[serde(default)]
    pub name: Option<String>,
}

/// Plain-text greeting; a missing name is rendered as `null`.
#[utoipa::path(
    get,
    path = "/hello",
    params(HelloParams),
    responses((status = 200, description = "Greeting.", body = String, content_type = "text/plain")),
    tag = "System"
)]
pub async fn hello(Query(params): Query<HelloParams>) -> String {
    format!("hello {}!!", params.name.as_deref().unwrap_or("null"))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing text.", body = String, content_type = "text/plain")),
    tag = "System"
)]
pub async fn index() -> &'static str {
    "main"
}
