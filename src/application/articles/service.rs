use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::article::ArticleRepository;

/// Pass-through layer over the article repository: one method per repository
/// operation, no business rules of its own. Timestamps come from the injected
/// clock so "current time" is observable in tests.
pub struct ArticleService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
