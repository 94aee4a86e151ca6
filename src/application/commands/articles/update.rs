// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate, AuthorName},
};

/// Partial edit of an existing article. The slug is intentionally absent:
/// slugs are fixed at first save.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image: Option<Option<String>>,
    pub category_ids: Option<Vec<i64>>,
    pub feature: Option<bool>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update.title = Some(ArticleTitle::new(title)?);
        }
        if let Some(author) = command.author {
            update.author = Some(AuthorName::new(author)?);
        }
        update.excerpt = command.excerpt;
        update.body = command.body;
        update.image = command.image;
        update.is_featured = command.feature;
        if let Some(ids) = command.category_ids {
            update.categories = Some(self.resolve_categories(&ids).await?);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
