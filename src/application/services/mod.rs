// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{articles::ArticleService, ports::time::Clock},
    domain::article::ArticleRepository,
};

/// Explicit wiring container: every service receives its collaborators
/// through the constructor, built once at startup.
pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
}

impl ApplicationServices {
    pub fn new(article_repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        let articles = Arc::new(ArticleService::new(article_repo, clock));

        Self { articles }
    }
}
