use std::sync::Arc;

use crate::application::dto::CategoryDto;
use crate::application::error::ApplicationResult;
use crate::domain::article::services::SlugService;
use crate::domain::article::{CategoryName, CategoryRepository, NewCategory};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

pub struct CategoryCommandService {
    categories: Arc<dyn CategoryRepository>,
    slug_service: Arc<SlugService>,
}

impl CategoryCommandService {
    pub fn new(categories: Arc<dyn CategoryRepository>, slug_service: Arc<SlugService>) -> Self {
        Self {
            categories,
            slug_service,
        }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = self.slug_service.unique_category_slug(&name).await?;

        let created = self
            .categories
            .insert(NewCategory {
                name,
                slug,
                description: command.description.unwrap_or_default(),
            })
            .await?;

        Ok(created.into())
    }
}
