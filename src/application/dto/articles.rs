use crate::application::dto::categories::CategoryDto;
use crate::application::dto::pagination::PageInfo;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub excerpt: String,
    pub body: String,
    pub categories: Vec<i64>,
    pub status: String,
    pub is_featured: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            author: article.author.into(),
            image: article.image,
            excerpt: article.excerpt,
            body: article.body,
            categories: article.categories.into_iter().map(Into::into).collect(),
            status: article.status.as_str().to_owned(),
            is_featured: article.is_featured,
            view_count: article.view_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Full-page context for the article feed: the page itself plus everything
/// the filter UI needs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleIndexDto {
    pub articles: Vec<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
    pub view_all: bool,
    pub has_search_or_filter: bool,
    pub categories: Vec<CategoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_article: Option<ArticleDto>,
    pub selected_categories: Vec<i64>,
    pub selected_category_records: Vec<CategoryDto>,
}

/// Incremental-update envelope: only the pieces the client swaps in place.
/// `pagination` is absent in view-all mode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleFeedFragments {
    pub articles: Vec<ArticleDto>,
    pub active_filters: Vec<CategoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
    pub has_search_or_filter: bool,
    pub total_count: u64,
    pub page: u32,
    pub total_pages: u32,
    pub view_all: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub related_articles: Vec<ArticleDto>,
}
