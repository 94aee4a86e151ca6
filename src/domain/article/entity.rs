// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, AuthorName, CategoryId, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Two-state publication lifecycle. Drafts never appear in public listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: Slug,
    pub author: AuthorName,
    pub image: Option<String>,
    pub excerpt: String,
    pub body: String,
    pub categories: Vec<CategoryId>,
    pub status: ArticleStatus,
    pub is_featured: bool,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Draft;
        self.updated_at = now;
    }
}

/// Insert payload; the slug is fixed here and never changes afterwards.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: Slug,
    pub author: AuthorName,
    pub image: Option<String>,
    pub excerpt: String,
    pub body: String,
    pub categories: Vec<CategoryId>,
    pub status: ArticleStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value. The slug is
/// deliberately not part of this struct.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub author: Option<AuthorName>,
    pub image: Option<Option<String>>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub categories: Option<Vec<CategoryId>>,
    pub status: Option<ArticleStatus>,
    pub is_featured: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            author: None,
            image: None,
            excerpt: None,
            body: None,
            categories: None,
            status: None,
            is_featured: None,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: Slug::new("title").unwrap(),
            author: AuthorName::new("someone").unwrap(),
            image: None,
            excerpt: "excerpt".into(),
            body: "body".into(),
            categories: vec![],
            status: ArticleStatus::Draft,
            is_featured: false,
            view_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn publish_sets_state() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        assert!(article.is_published());
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn unpublish_returns_to_draft() {
        let mut article = sample_article();
        let now = Utc::now();
        article.publish(now);
        let later = now + chrono::Duration::seconds(10);
        article.unpublish(later);
        assert!(!article.is_published());
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn status_round_trips_through_parse() {
        assert_eq!(
            ArticleStatus::parse("published").unwrap(),
            ArticleStatus::Published
        );
        assert_eq!(ArticleStatus::parse("draft").unwrap(), ArticleStatus::Draft);
        assert!(ArticleStatus::parse("archived").is_err());
    }
}
