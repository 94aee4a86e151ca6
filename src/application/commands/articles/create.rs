// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleStatus, ArticleTitle, AuthorName, NewArticle, Slug},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub author: String,
    pub excerpt: String,
    pub body: String,
    pub image: Option<String>,
    /// Explicit slug; generated from the title when absent. Fixed either way
    /// at first save.
    pub slug: Option<String>,
    pub category_ids: Vec<i64>,
    pub publish: bool,
    pub feature: bool,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let author = AuthorName::new(command.author)?;
        let categories = self.resolve_categories(&command.category_ids).await?;
        let now = self.clock.now();

        let slug = match command.slug {
            Some(raw) => {
                let slug = Slug::new(raw)?;
                if self.read_repo.find_by_slug(&slug).await?.is_some() {
                    return Err(ApplicationError::conflict(format!(
                        "slug '{slug}' is already taken"
                    )));
                }
                slug
            }
            None => self.slug_service.unique_article_slug(&title).await?,
        };

        let new_article = NewArticle {
            title,
            slug,
            author,
            image: command.image,
            excerpt: command.excerpt,
            body: command.body,
            categories,
            status: if command.publish {
                ArticleStatus::Published
            } else {
                ArticleStatus::Draft
            },
            is_featured: command.feature,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
