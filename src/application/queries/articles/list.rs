use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleFeedFragments, ArticleIndexDto, CategoryDto, PageInfo},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleListing, PageSelection, ResolvedPage, resolve_page},
};

/// Raw feed parameters as they arrive on the query string. Lowering them
/// into an [`ArticleListing`] never fails; malformed values degrade to
/// defaults.
#[derive(Debug, Default, Clone)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub view_all: Option<String>,
}

impl ListArticlesQuery {
    pub fn build(&self) -> (ArticleListing, PageSelection) {
        let view_all = parse_flag(self.view_all.as_deref());
        let listing = ArticleListing::from_params(
            self.search.as_deref(),
            self.category.as_deref(),
            self.sort.as_deref(),
            view_all,
        );
        let selection = PageSelection::resolve(view_all, self.page.as_deref());
        (listing, selection)
    }
}

/// `view_all=true` (or `1`) enables view-all; anything else leaves
/// pagination on.
fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

struct FeedPage {
    items: Vec<Article>,
    listing: ArticleListing,
    resolved: ResolvedPage,
    total: u64,
    view_all: bool,
}

impl ArticleQueryService {
    /// Full-page feed: the resolved page plus the category list, featured
    /// article and active-filter echo the page shell renders around it.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleIndexDto> {
        let feed = self.execute(&query).await?;

        let categories = self.categories.list_all().await?;
        let featured = self.read_repo.find_featured().await?;
        let selected_records = self.resolve_selected(&feed.listing).await?;

        let selected_categories = feed.listing.categories.iter().map(|id| i64::from(*id)).collect();
        let pagination = feed.page_info();

        Ok(ArticleIndexDto {
            articles: feed.items.into_iter().map(ArticleDto::from).collect(),
            pagination,
            total_count: feed.total,
            page: feed.resolved.page,
            total_pages: feed.resolved.total_pages,
            view_all: feed.view_all,
            has_search_or_filter: feed.listing.has_search_or_filter,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            featured_article: featured.map(ArticleDto::from),
            selected_categories,
            selected_category_records: selected_records,
        })
    }

    /// Fragment mode for incremental client updates: the same result set,
    /// reduced to the independently renderable pieces.
    pub async fn list_article_fragments(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleFeedFragments> {
        let feed = self.execute(&query).await?;
        let active_filters = self.resolve_selected(&feed.listing).await?;
        let pagination = feed.page_info();

        Ok(ArticleFeedFragments {
            articles: feed.items.into_iter().map(ArticleDto::from).collect(),
            active_filters,
            pagination,
            has_search_or_filter: feed.listing.has_search_or_filter,
            total_count: feed.total,
            page: feed.resolved.page,
            total_pages: feed.resolved.total_pages,
            view_all: feed.view_all,
        })
    }

    /// Filters first, then sort, then pagination: count the filtered set,
    /// clamp the requested page against it, fetch the window.
    async fn execute(&self, query: &ListArticlesQuery) -> ApplicationResult<FeedPage> {
        let (listing, selection) = query.build();

        let total = self.read_repo.count_filtered(&listing).await?;
        let resolved = resolve_page(selection, total, self.page_size);
        let items = self
            .read_repo
            .list_filtered(&listing, resolved.window)
            .await?;

        Ok(FeedPage {
            items,
            listing,
            resolved,
            total,
            view_all: selection == PageSelection::All,
        })
    }

    async fn resolve_selected(&self, listing: &ArticleListing) -> ApplicationResult<Vec<CategoryDto>> {
        if listing.categories.is_empty() {
            return Ok(Vec::new());
        }
        let records = self.categories.find_by_ids(&listing.categories).await?;
        Ok(records.into_iter().map(CategoryDto::from).collect())
    }
}

impl FeedPage {
    fn page_info(&self) -> Option<PageInfo> {
        if self.view_all {
            None
        } else {
            Some(PageInfo::new(self.resolved.page, self.resolved.total_pages))
        }
    }
}
