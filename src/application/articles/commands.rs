use super::ArticleService;
use crate::application::error::ApplicationResult;
use crate::domain::article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate, NewArticle};

impl ArticleService {
    /// Inserts a new article stamped with the current time and returns the
    /// store-assigned id.
    pub async fn write(
        &self,
        title: impl Into<String>,
        body: impl Into<String>,
        is_blind: bool,
    ) -> ApplicationResult<i64> {
        let title = ArticleTitle::new(title)?;
        let body = ArticleBody::new(body)?;
        let now = self.clock.now();

        let created = self
            .repo
            .insert(NewArticle {
                title,
                body,
                is_blind,
                created_date: now,
                modified_date: now,
            })
            .await?;

        Ok(created.id.into())
    }

    /// Replaces title, body and blind flag and refreshes `modified_date`.
    /// Returns the affected-row count; zero when the id does not exist.
    pub async fn modify(
        &self,
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        is_blind: bool,
    ) -> ApplicationResult<u64> {
        let update = ArticleUpdate {
            id: ArticleId::new(id),
            title: ArticleTitle::new(title)?,
            body: ArticleBody::new(body)?,
            is_blind,
            modified_date: self.clock.now(),
        };

        Ok(self.repo.update(update).await?)
    }

    /// Hard removal; silently a no-op when the id does not exist.
    pub async fn delete(&self, id: i64) -> ApplicationResult<()> {
        self.repo.delete(ArticleId::new(id)).await?;
        Ok(())
    }
}
