// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, categories::CategoryCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::{
            articles::ArticleQueryService, divisions::DivisionQueryService,
            events::EventQueryService, home::HomeQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, CategoryRepository,
            services::SlugService,
        },
        division::DivisionRepository,
        event::EventRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub division_queries: Arc<DivisionQueryService>,
    pub event_queries: Arc<EventQueryService>,
    pub home_queries: Arc<HomeQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        division_repo: Arc<dyn DivisionRepository>,
        event_repo: Arc<dyn EventRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        article_page_size: u32,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slug_service),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            Arc::clone(&category_repo),
            article_page_size,
        ));

        let division_queries = Arc::new(DivisionQueryService::new(Arc::clone(&division_repo)));
        let event_queries = Arc::new(EventQueryService::new(
            Arc::clone(&event_repo),
            Arc::clone(&clock),
        ));
        let home_queries = Arc::new(HomeQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&event_repo),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            category_commands,
            article_queries,
            division_queries,
            event_queries,
            home_queries,
        }
    }
}
