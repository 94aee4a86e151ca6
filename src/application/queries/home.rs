use std::sync::Arc;

use crate::application::dto::{ArticleDto, EventDto, HomePageDto};
use crate::application::error::ApplicationResult;
use crate::application::ports::time::Clock;
use crate::domain::article::ArticleReadRepository;
use crate::domain::event::EventRepository;

/// The homepage shows the heads of both feeds.
const HOME_FEED_LIMIT: u32 = 3;

pub struct HomeQueryService {
    articles: Arc<dyn ArticleReadRepository>,
    events: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl HomeQueryService {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        events: Arc<dyn EventRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            articles,
            events,
            clock,
        }
    }

    pub async fn home_page(&self) -> ApplicationResult<HomePageDto> {
        let today = self.clock.now().date_naive();
        let articles = self.articles.list_latest(HOME_FEED_LIMIT).await?;
        let events = self
            .events
            .list_upcoming(today, Some(HOME_FEED_LIMIT))
            .await?;

        Ok(HomePageDto {
            articles: articles.into_iter().map(ArticleDto::from).collect(),
            events: events
                .into_iter()
                .map(|e| EventDto::from_event(e, today))
                .collect(),
        })
    }
}
