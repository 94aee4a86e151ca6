// tests/support/builders.rs
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use orgsite_core::domain::article::*;
use orgsite_core::domain::event::{Event, EventId};

/// Deterministic creation times: the article with the higher id is newer.
pub fn created_at_for(id: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + id * 60, 0).unwrap()
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    author: String,
    excerpt: String,
    body: String,
    categories: Vec<i64>,
    status: ArticleStatus,
    is_featured: bool,
    view_count: u64,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Test Article {id}"),
            slug: None,
            author: "Test Author".into(),
            excerpt: "A short description".into(),
            body: "Body text".into(),
            categories: Vec::new(),
            status: ArticleStatus::Published,
            is_featured: false,
            view_count: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn categories(mut self, ids: &[i64]) -> Self {
        self.categories = ids.to_vec();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    pub fn views(mut self, count: u64) -> Self {
        self.view_count = count;
        self
    }

    pub fn build(self) -> Article {
        let created_at = created_at_for(self.id);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: Slug::new(self.slug.unwrap_or_else(|| format!("test-article-{}", self.id)))
                .unwrap(),
            author: AuthorName::new(self.author).unwrap(),
            image: None,
            excerpt: self.excerpt,
            body: self.body,
            categories: self
                .categories
                .iter()
                .map(|c| CategoryId::new(*c).unwrap())
                .collect(),
            status: self.status,
            is_featured: self.is_featured,
            view_count: self.view_count,
            created_at,
            updated_at: created_at,
        }
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        slug: Slug::new(name.to_lowercase().replace(' ', "-")).unwrap(),
        description: String::new(),
    }
}

pub fn event(id: i64, date: NaiveDate, time: NaiveTime) -> Event {
    Event {
        id: EventId::new(id).unwrap(),
        title: format!("Event {id}"),
        description: "An event".into(),
        image_url: "https://example.com/event.png".into(),
        date,
        time,
        location: "Main hall".into(),
        created_at: created_at_for(id),
    }
}
