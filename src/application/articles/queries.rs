use super::ArticleService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};
use crate::domain::article::ArticleId;

impl ArticleService {
    /// All articles, id ascending, blind rows included.
    pub async fn get_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Direct lookup ignores the blind flag; a miss is `None`, never an
    /// error, including ids the store never issued.
    pub async fn get_article_by_id(&self, id: i64) -> ApplicationResult<Option<ArticleDto>> {
        let article = self.repo.find_by_id(ArticleId::new(id)).await?;
        Ok(article.map(Into::into))
    }

    pub async fn get_articles_count(&self) -> ApplicationResult<i64> {
        Ok(self.repo.count().await?)
    }

    /// Convenience form: extracts the id and delegates.
    pub async fn get_prev_article_of(
        &self,
        article: &ArticleDto,
    ) -> ApplicationResult<Option<ArticleDto>> {
        self.get_prev_article(article.id).await
    }

    /// Nearest non-blind article with a smaller id, if any.
    pub async fn get_prev_article(&self, id: i64) -> ApplicationResult<Option<ArticleDto>> {
        let article = self.repo.find_prev(ArticleId::new(id)).await?;
        Ok(article.map(Into::into))
    }

    /// Nearest non-blind article with a greater id, if any.
    pub async fn get_next_article(&self, id: i64) -> ApplicationResult<Option<ArticleDto>> {
        let article = self.repo.find_next(ArticleId::new(id)).await?;
        Ok(article.map(Into::into))
    }
}
