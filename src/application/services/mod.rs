// src/application/services/mod.rs
use std::sync::Arc;

use crate::{application::articles::ArticleService, domain::article::ArticleRepository};

/// Everything the presentation layer can call, wired by constructor injection.
pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        let articles = Arc::new(ArticleService::new(Arc::clone(&article_repo)));
        Self { articles }
    }
}
