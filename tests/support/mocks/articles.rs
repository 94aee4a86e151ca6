// tests/support/mocks/articles.rs
use std::sync::Mutex;

use async_trait::async_trait;

use orgsite_core::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSort, ArticleUpdate,
    ArticleWriteRepository, NewArticle, Slug,
};
use orgsite_core::domain::errors::{DomainError, DomainResult};

/// In-memory article store implementing both repository traits. Filtering
/// and ordering go through the same domain spec the SQL queries mirror.
pub struct InMemoryArticleRepo {
    inner: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            inner: Mutex::new(articles),
        }
    }

    pub fn view_count(&self, id: i64) -> u64 {
        let articles = self.inner.lock().unwrap();
        articles
            .iter()
            .find(|a| i64::from(a.id) == id)
            .map(|a| a.view_count)
            .unwrap_or(0)
    }

    fn next_id(articles: &[Article]) -> i64 {
        articles
            .iter()
            .map(|a| i64::from(a.id))
            .max()
            .unwrap_or(0)
            + 1
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn count_filtered(&self, listing: &ArticleListing) -> DomainResult<u64> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.iter().filter(|a| listing.matches(a)).count() as u64)
    }

    async fn list_filtered(
        &self,
        listing: &ArticleListing,
        window: Option<(u32, u64)>,
    ) -> DomainResult<Vec<Article>> {
        let articles = self.inner.lock().unwrap();
        let mut matched: Vec<Article> = articles
            .iter()
            .filter(|a| listing.matches(a))
            .cloned()
            .collect();
        matched.sort_by(|a, b| listing.sort.compare(a, b));

        Ok(match window {
            Some((limit, offset)) => matched
                .into_iter()
                .skip(usize::try_from(offset).unwrap())
                .take(limit as usize)
                .collect(),
            None => matched,
        })
    }

    async fn find_featured(&self) -> DomainResult<Option<Article>> {
        let articles = self.inner.lock().unwrap();
        let mut featured: Vec<&Article> = articles
            .iter()
            .filter(|a| a.is_published() && a.is_featured)
            .collect();
        featured.sort_by(|a, b| ArticleSort::Recent.compare(a, b));
        Ok(featured.first().map(|a| (*a).clone()))
    }

    async fn list_related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>> {
        let articles = self.inner.lock().unwrap();
        let Some(subject) = articles.iter().find(|a| a.id == id) else {
            return Ok(Vec::new());
        };
        let mut related: Vec<Article> = articles
            .iter()
            .filter(|a| {
                a.id != id
                    && a.is_published()
                    && a.categories
                        .iter()
                        .any(|c| subject.categories.contains(c))
            })
            .cloned()
            .collect();
        related.sort_by(|a, b| ArticleSort::Recent.compare(a, b));
        related.truncate(limit as usize);
        Ok(related)
    }

    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let articles = self.inner.lock().unwrap();
        let mut latest: Vec<Article> = articles
            .iter()
            .filter(|a| a.is_published())
            .cloned()
            .collect();
        latest.sort_by(|a, b| ArticleSort::Recent.compare(a, b));
        latest.truncate(limit as usize);
        Ok(latest)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("unique constraint violated".into()));
        }
        let stored = Article {
            id: ArticleId::new(Self::next_id(&articles))?,
            title: article.title,
            slug: article.slug,
            author: article.author,
            image: article.image,
            excerpt: article.excerpt,
            body: article.body,
            categories: article.categories,
            status: article.status,
            is_featured: article.is_featured,
            view_count: 0,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        if let Some(image) = update.image {
            article.image = image;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(categories) = update.categories {
            article.categories = categories;
        }
        if let Some(status) = update.status {
            article.status = status;
        }
        if let Some(is_featured) = update.is_featured {
            article.is_featured = is_featured;
        }
        article.updated_at = update.updated_at;

        Ok(article.clone())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<u64> {
        let mut articles = self.inner.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += 1;
        Ok(article.view_count)
    }
}
