pub mod category;
pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use category::{Category, NewCategory};
pub use entity::{Article, ArticleStatus, ArticleUpdate, NewArticle};
pub use listing::{ArticleListing, ArticleSort, PageSelection, ResolvedPage, resolve_page};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, CategoryRepository};
pub use value_objects::{ArticleId, ArticleTitle, AuthorName, CategoryId, CategoryName, Slug};
