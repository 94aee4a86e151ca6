// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::{ArticleReadRepository, CategoryRepository};
use crate::domain::article::value_objects::{ArticleTitle, CategoryName, Slug};
use crate::domain::errors::DomainResult;

/// Domain service producing unique slugs for articles and categories.
/// Collisions are resolved by probing `-1`, `-2`, … suffixes.
pub struct SlugService {
    articles: Arc<dyn ArticleReadRepository>,
    categories: Arc<dyn CategoryRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        categories: Arc<dyn CategoryRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            articles,
            categories,
            generator,
        }
    }

    pub async fn unique_article_slug(&self, title: &ArticleTitle) -> DomainResult<Slug> {
        let base = self.base_slug(title.as_str(), "article");
        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = Slug::new(candidate.clone())?;
            if self.articles.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }

    pub async fn unique_category_slug(&self, name: &CategoryName) -> DomainResult<Slug> {
        let base = self.base_slug(name.as_str(), "category");
        let mut candidate = base.clone();
        let mut counter = 1u64;
        loop {
            let slug = Slug::new(candidate.clone())?;
            if self.categories.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
            candidate = format!("{base}-{counter}");
            counter += 1;
        }
    }

    fn base_slug(&self, text: &str, fallback_prefix: &str) -> String {
        let base = self.generator.slugify(text);
        if base.is_empty() {
            format!("{fallback_prefix}-{}", Utc::now().timestamp())
        } else {
            base
        }
    }
}
