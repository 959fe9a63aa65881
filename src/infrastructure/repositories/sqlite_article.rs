use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleRepository, ArticleTitle, ArticleUpdate, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    is_blind: i64,
    created_date: DateTime<Utc>,
    modified_date: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            is_blind: row.is_blind != 0,
            created_date: row.created_date,
            modified_date: row.modified_date,
        })
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, is_blind, created_date, modified_date FROM article ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, is_blind, created_date, modified_date FROM article WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn count(&self) -> DomainResult<i64> {
        sqlx::query_scalar("SELECT COUNT(1) FROM article")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)
    }

    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            is_blind,
            created_date,
            modified_date,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO article (title, body, is_blind, created_date, modified_date) VALUES (?, ?, ?, ?, ?) RETURNING id, title, body, is_blind, created_date, modified_date",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(if is_blind { 1 } else { 0 })
        .bind(created_date)
        .bind(modified_date)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        let ArticleUpdate {
            id,
            title,
            body,
            is_blind,
            modified_date,
        } = update;

        let result = sqlx::query(
            "UPDATE article SET title = ?, body = ?, is_blind = ?, modified_date = ? WHERE id = ?",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(if is_blind { 1 } else { 0 })
        .bind(modified_date)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }

    async fn find_prev(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, is_blind, created_date, modified_date FROM article WHERE id < ? AND is_blind = 0 ORDER BY id DESC LIMIT 1",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_next(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, is_blind, created_date, modified_date FROM article WHERE id > ? AND is_blind = 0 ORDER BY id ASC LIMIT 1",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }
}
