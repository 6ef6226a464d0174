// src/presentation/http/extractors.rs
use axum::extract::{FromRequest, FromRequestParts};

use super::error::HttpError;

/// `axum::Json` whose rejections (bad syntax, missing fields, wrong content type)
/// all surface as 400 with the usual error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` that answers unparsable segments with the JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct ApiPath<T>(pub T);
