use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::Slug,
};

const RELATED_LIMIT: u32 = 3;

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    /// Detail lookup. Every successful hit bumps the view counter by exactly
    /// one (atomically, at the storage layer) and pulls up to three related
    /// articles sharing a category.
    pub async fn get_article_by_slug(
        &self,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let slug = Slug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        let mut article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.view_count = self.write_repo.increment_view_count(article.id).await?;

        let related = self
            .read_repo
            .list_related(article.id, RELATED_LIMIT)
            .await?;

        Ok(ArticleDetailDto {
            article: ArticleDto::from(article),
            related_articles: related.into_iter().map(ArticleDto::from).collect(),
        })
    }
}
