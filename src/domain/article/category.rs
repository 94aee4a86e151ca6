use crate::domain::article::value_objects::{CategoryId, CategoryName, Slug};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: Slug,
    pub description: String,
}
