use std::sync::Arc;

use crate::application::dto::CategoryDto;
use crate::application::error::ApplicationResult;
use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository, CategoryRepository};

/// Read side of the article feed. The write repository is only here for the
/// view-counter side effect of detail lookups.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) page_size: u32,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        categories: Arc<dyn CategoryRepository>,
        page_size: u32,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            categories,
            page_size: page_size.max(1),
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.categories.list_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
