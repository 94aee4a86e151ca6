// tests/support/mocks/categories.rs
use std::sync::Mutex;

use async_trait::async_trait;

use orgsite_core::domain::article::{
    Category, CategoryId, CategoryRepository, NewCategory, Slug,
};
use orgsite_core::domain::errors::{DomainError, DomainResult};

pub struct InMemoryCategoryRepo {
    inner: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepo {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: Mutex::new(categories),
        }
    }
}

fn by_name(a: &Category, b: &Category) -> std::cmp::Ordering {
    a.name
        .as_str()
        .to_lowercase()
        .cmp(&b.name.as_str().to_lowercase())
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.inner.lock().unwrap();
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("unique constraint violated".into()));
        }
        let next_id = categories
            .iter()
            .map(|c| i64::from(c.id))
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Category {
            id: CategoryId::new(next_id)?,
            name: category.name,
            slug: category.slug,
            description: category.description,
        };
        categories.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let categories = self.inner.lock().unwrap();
        let mut all = categories.clone();
        all.sort_by(by_name);
        Ok(all)
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let categories = self.inner.lock().unwrap();
        let mut found: Vec<Category> = categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect();
        found.sort_by(by_name);
        Ok(found)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let categories = self.inner.lock().unwrap();
        Ok(categories.iter().find(|c| &c.slug == slug).cloned())
    }
}
