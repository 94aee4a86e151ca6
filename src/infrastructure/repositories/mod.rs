// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_category;
mod sqlite_division;
mod sqlite_event;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_category::SqliteCategoryRepository;
pub use sqlite_division::SqliteDivisionRepository;
pub use sqlite_event::SqliteEventRepository;
