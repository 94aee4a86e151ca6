use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::article::services::SlugService;
use crate::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, CategoryId, CategoryRepository,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        slug_service: Arc<SlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            categories,
            slug_service,
            clock,
        }
    }

    /// Validate and resolve a category id list; unknown ids are a validation
    /// error here (unlike the listing filter, where they silently match
    /// nothing).
    pub(super) async fn resolve_categories(
        &self,
        ids: &[i64],
    ) -> ApplicationResult<Vec<CategoryId>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            let id = CategoryId::new(*id)?;
            if !resolved.contains(&id) {
                resolved.push(id);
            }
        }
        let found = self.categories.find_by_ids(&resolved).await?;
        if found.len() != resolved.len() {
            return Err(ApplicationError::validation("unknown category id"));
        }
        Ok(resolved)
    }
}
