// src/application/ports/util.rs

/// Turns free text (titles, category names) into URL-safe slug material.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
