// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub is_blind: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl Article {
    /// Whether prev/next navigation may land on this article.
    pub fn is_navigable(&self) -> bool {
        !self.is_blind
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub is_blind: bool,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

/// Full replacement of the mutable columns; `created_date` is immutable and
/// never part of an update.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub is_blind: bool,
    pub modified_date: DateTime<Utc>,
}
