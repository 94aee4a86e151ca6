// src/domain/article/listing.rs
//
// The listing specification for the public article feed: free-text search,
// category union filter, sort key and page selection, lowered from raw
// request parameters. Malformed parameters degrade to defaults instead of
// erroring.
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::CategoryId;
use std::cmp::Ordering;

/// Sort keys accepted by the article feed. Anything else falls back to
/// [`ArticleSort::Recent`], the feed's default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    Recent,
    Oldest,
    Popular,
    TitleAsc,
    TitleDesc,
}

impl ArticleSort {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("recent") => Self::Recent,
            Some("oldest") => Self::Oldest,
            Some("popular") => Self::Popular,
            Some("az") => Self::TitleAsc,
            Some("za") => Self::TitleDesc,
            _ => Self::default(),
        }
    }

    /// Total order over articles for this sort key. Ties always fall back to
    /// the id so orderings stay stable across pages; `popular` ties break by
    /// creation time first.
    pub fn compare(self, a: &Article, b: &Article) -> Ordering {
        let primary = match self {
            Self::Recent => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::Popular => b
                .view_count
                .cmp(&a.view_count)
                .then(b.created_at.cmp(&a.created_at)),
            Self::TitleAsc => a
                .title
                .as_str()
                .to_lowercase()
                .cmp(&b.title.as_str().to_lowercase()),
            Self::TitleDesc => b
                .title
                .as_str()
                .to_lowercase()
                .cmp(&a.title.as_str().to_lowercase()),
        };
        primary.then_with(|| match self {
            Self::Oldest | Self::TitleAsc => a.id.cmp(&b.id),
            _ => b.id.cmp(&a.id),
        })
    }
}

/// Whether the client asked for everything or for one page of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    All,
    Page(u32),
}

impl PageSelection {
    pub fn resolve(view_all: bool, raw_page: Option<&str>) -> Self {
        if view_all {
            return Self::All;
        }
        let page = raw_page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        Self::Page(page)
    }
}

/// Filter and ordering spec the repositories execute. Built once per request
/// from the raw query parameters; carries no request or storage state.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub search: Option<String>,
    pub categories: Vec<CategoryId>,
    pub sort: ArticleSort,
    /// True when the client sent any search/filter/sort/view-all parameter,
    /// even an unrecognized sort value. The renderer uses this to suppress
    /// the featured banner.
    pub has_search_or_filter: bool,
}

impl ArticleListing {
    pub fn from_params(
        search: Option<&str>,
        category_csv: Option<&str>,
        sort: Option<&str>,
        view_all: bool,
    ) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        let sort_param = sort.map(str::trim).filter(|s| !s.is_empty());
        let categories = parse_category_ids(category_csv);
        let has_search_or_filter =
            search.is_some() || !categories.is_empty() || sort_param.is_some() || view_all;

        Self {
            search,
            categories,
            sort: ArticleSort::parse(sort_param),
            has_search_or_filter,
        }
    }

    /// In-memory evaluation of the filter, mirroring the SQL the
    /// repositories build: published only, case-insensitive substring over
    /// title/body/excerpt, then membership in any selected category.
    pub fn matches(&self, article: &Article) -> bool {
        if !article.is_published() {
            return false;
        }

        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let hit = article.title.as_str().to_lowercase().contains(&needle)
                || article.body.to_lowercase().contains(&needle)
                || article.excerpt.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if !self.categories.is_empty()
            && !article
                .categories
                .iter()
                .any(|id| self.categories.contains(id))
        {
            return false;
        }

        true
    }
}

/// Parse a comma-separated id list; malformed or non-positive tokens are
/// dropped silently (they can never match anything anyway).
fn parse_category_ids(csv: Option<&str>) -> Vec<CategoryId> {
    let Some(csv) = csv else {
        return Vec::new();
    };
    let mut ids = Vec::new();
    for id in csv
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .filter_map(|id| CategoryId::new(id).ok())
    {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// One resolved page of a filtered feed: requested page clamped into the
/// valid range, with the limit/offset window to fetch (none for view-all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
    pub page: u32,
    pub total_pages: u32,
    pub window: Option<(u32, u64)>,
}

/// Pagination arithmetic for the feed. An empty corpus still resolves to
/// page 1 of 1 so the renderer never divides by zero.
pub fn resolve_page(selection: PageSelection, total: u64, page_size: u32) -> ResolvedPage {
    match selection {
        PageSelection::All => ResolvedPage {
            page: 1,
            total_pages: 1,
            window: None,
        },
        PageSelection::Page(requested) => {
            let size = u64::from(page_size.max(1));
            let total_pages = total.div_ceil(size).max(1);
            let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);
            let page = requested.clamp(1, total_pages);
            let offset = u64::from(page - 1) * size;
            ResolvedPage {
                page,
                total_pages,
                window: Some((page_size.max(1), offset)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::ArticleStatus;
    use crate::domain::article::value_objects::{ArticleId, ArticleTitle, AuthorName, Slug};
    use chrono::{TimeZone, Utc};

    fn article(id: i64, title: &str, views: u64, categories: &[i64]) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            slug: Slug::new(format!("a-{id}")).unwrap(),
            author: AuthorName::new("writer").unwrap(),
            image: None,
            excerpt: "short blurb".into(),
            body: "full body text".into(),
            categories: categories
                .iter()
                .map(|c| CategoryId::new(*c).unwrap())
                .collect(),
            status: ArticleStatus::Published,
            is_featured: false,
            view_count: views,
            created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
            updated_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        }
    }

    #[test]
    fn sort_parse_falls_back_to_recent() {
        assert_eq!(ArticleSort::parse(Some("popular")), ArticleSort::Popular);
        assert_eq!(ArticleSort::parse(Some("za")), ArticleSort::TitleDesc);
        assert_eq!(ArticleSort::parse(Some("bogus")), ArticleSort::Recent);
        assert_eq!(ArticleSort::parse(None), ArticleSort::Recent);
    }

    #[test]
    fn search_matches_any_text_field_case_insensitively() {
        let listing = ArticleListing::from_params(Some("BODY"), None, None, false);
        assert!(listing.matches(&article(1, "plain title", 0, &[])));

        let listing = ArticleListing::from_params(Some("blurb"), None, None, false);
        assert!(listing.matches(&article(1, "plain title", 0, &[])));

        let listing = ArticleListing::from_params(Some("absent"), None, None, false);
        assert!(!listing.matches(&article(1, "plain title", 0, &[])));
    }

    #[test]
    fn drafts_never_match() {
        let listing = ArticleListing::from_params(None, None, None, false);
        let mut draft = article(1, "t", 0, &[]);
        draft.status = ArticleStatus::Draft;
        assert!(!listing.matches(&draft));
    }

    #[test]
    fn category_filter_is_a_union() {
        let listing = ArticleListing::from_params(None, Some("1,2"), None, false);
        assert!(listing.matches(&article(1, "t", 0, &[1])));
        assert!(listing.matches(&article(2, "t", 0, &[2, 9])));
        assert!(!listing.matches(&article(3, "t", 0, &[3])));
    }

    #[test]
    fn malformed_category_tokens_are_dropped() {
        let listing = ArticleListing::from_params(None, Some("1,abc,-4,,2"), None, false);
        assert_eq!(
            listing.categories,
            vec![CategoryId::new(1).unwrap(), CategoryId::new(2).unwrap()]
        );
    }

    #[test]
    fn has_search_or_filter_counts_unrecognized_sort() {
        assert!(ArticleListing::from_params(None, None, Some("weird"), false).has_search_or_filter);
        assert!(!ArticleListing::from_params(None, None, None, false).has_search_or_filter);
        assert!(ArticleListing::from_params(None, None, None, true).has_search_or_filter);
        // blank parameters do not count as active filters
        assert!(
            !ArticleListing::from_params(Some("  "), Some(""), Some(""), false)
                .has_search_or_filter
        );
    }

    #[test]
    fn popular_orders_by_views_then_recency() {
        let a = article(1, "a", 5, &[]);
        let b = article(2, "b", 10, &[]);
        let c = article(3, "c", 10, &[]);
        let mut items = vec![a, b, c];
        items.sort_by(|x, y| ArticleSort::Popular.compare(x, y));
        let ids: Vec<i64> = items.iter().map(|a| a.id.into()).collect();
        // c is newer than b at equal view counts
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn title_sorts_ignore_case() {
        let mut items = vec![
            article(1, "banana", 0, &[]),
            article(2, "Apple", 0, &[]),
            article(3, "cherry", 0, &[]),
        ];
        items.sort_by(|x, y| ArticleSort::TitleAsc.compare(x, y));
        let titles: Vec<&str> = items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn page_resolution_clamps_out_of_range_requests() {
        let resolved = resolve_page(PageSelection::Page(99), 20, 9);
        assert_eq!(resolved.page, 3);
        assert_eq!(resolved.total_pages, 3);
        assert_eq!(resolved.window, Some((9, 18)));

        let resolved = resolve_page(PageSelection::Page(1), 0, 9);
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.total_pages, 1);

        let resolved = resolve_page(PageSelection::resolve(false, Some("-2")), 20, 9);
        assert_eq!(resolved.page, 1);
    }

    #[test]
    fn view_all_disables_the_window() {
        let resolved = resolve_page(PageSelection::resolve(true, Some("4")), 100, 9);
        assert_eq!(resolved.window, None);
        assert_eq!(resolved.total_pages, 1);
    }
}
