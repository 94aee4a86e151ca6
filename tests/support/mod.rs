// tests/support/mod.rs
pub mod builders;
pub mod mocks;

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use orgsite_core::application::ports::{time::Clock, util::SlugGenerator};
use orgsite_core::application::services::ApplicationServices;
use orgsite_core::domain::article::{
    ArticleReadRepository, ArticleWriteRepository, CategoryRepository,
};
use orgsite_core::domain::division::DivisionRepository;
use orgsite_core::domain::event::EventRepository;
use orgsite_core::presentation::http::{routes::build_router, state::HttpState};

use builders::{ArticleBuilder, category, event};
use mocks::{
    FixedClock, InMemoryArticleRepo, InMemoryCategoryRepo, InMemoryDivisionRepo,
    InMemoryEventRepo, SimpleSlugGenerator,
};

/// "Now" for every test clock: events on 2025-06-15 are upcoming.
static TEST_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap());

pub fn test_now() -> DateTime<Utc> {
    *TEST_NOW
}

pub struct TestEnv {
    pub router: Router,
    pub articles: Arc<InMemoryArticleRepo>,
}

/// Router over in-memory repositories seeded with a small fixed corpus:
/// three published articles (one featured), one draft, three categories and
/// three events straddling `test_now`.
pub fn make_env(page_size: u32) -> TestEnv {
    let articles = Arc::new(InMemoryArticleRepo::new(vec![
        ArticleBuilder::new(1)
            .title("Rust at the branch")
            .body("How we introduced rust workshops")
            .categories(&[1])
            .views(5)
            .build(),
        ArticleBuilder::new(2)
            .title("Community day recap")
            .categories(&[2])
            .views(10)
            .build(),
        ArticleBuilder::new(3)
            .title("Drafted thoughts")
            .categories(&[1])
            .draft()
            .build(),
        ArticleBuilder::new(4)
            .title("Research roundup")
            .categories(&[1, 2])
            .views(7)
            .featured()
            .build(),
    ]));
    let categories = Arc::new(InMemoryCategoryRepo::new(vec![
        category(1, "Tech"),
        category(2, "Community"),
        category(3, "Research"),
    ]));
    let events = Arc::new(InMemoryEventRepo::new(vec![
        event(
            1,
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        ),
        event(
            2,
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        ),
        event(
            3,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        ),
    ]));
    let divisions = Arc::new(InMemoryDivisionRepo::new(vec![], vec![], vec![]));

    let read_repo: Arc<dyn ArticleReadRepository> = articles.clone();
    let write_repo: Arc<dyn ArticleWriteRepository> = articles.clone();
    let category_repo: Arc<dyn CategoryRepository> = categories;
    let division_repo: Arc<dyn DivisionRepository> = divisions;
    let event_repo: Arc<dyn EventRepository> = events;
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(test_now()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(SimpleSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        category_repo,
        division_repo,
        event_repo,
        clock,
        slugger,
        page_size,
    ));

    TestEnv {
        router: build_router(HttpState { services }),
        articles,
    }
}

pub fn make_test_router() -> Router {
    make_env(9).router
}
