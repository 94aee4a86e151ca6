use crate::domain::article::category::{Category, NewCategory};
use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::{ArticleId, CategoryId, Slug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Atomic `view_count = view_count + 1`; returns the new count.
    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Slug lookup over every stored article, drafts included; listings are
    /// the only place the status filter applies.
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>>;
    async fn count_filtered(&self, listing: &ArticleListing) -> DomainResult<u64>;
    /// Fetch the filtered, sorted feed; `window` is `(limit, offset)`, or
    /// `None` for the entire set (view-all).
    async fn list_filtered(
        &self,
        listing: &ArticleListing,
        window: Option<(u32, u64)>,
    ) -> DomainResult<Vec<Article>>;
    /// Most recently created published article flagged as featured.
    async fn find_featured(&self) -> DomainResult<Option<Article>>;
    /// Published articles sharing at least one category with `id`, excluding
    /// `id` itself, default ordering, capped at `limit`.
    async fn list_related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>>;
    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// All categories, ordered by name for display.
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
    /// Resolve the selected filter ids; unknown ids are simply absent from
    /// the result. Ordered by name.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
}
