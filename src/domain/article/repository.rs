use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// All articles, ordered by id ascending. Blind rows are included.
    async fn list(&self) -> DomainResult<Vec<Article>>;

    /// Absence is a value, not an error.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Total row count, blind rows included.
    async fn count(&self) -> DomainResult<i64>;

    /// Inserts a row; the returned article carries the store-assigned id.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Returns the number of affected rows (zero when the id is absent).
    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64>;

    /// No-op when the id is absent.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Greatest id strictly below `id`, skipping blind rows.
    async fn find_prev(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Smallest id strictly above `id`, skipping blind rows.
    async fn find_next(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}
