use std::sync::Arc;

use crate::application::dto::{EventBoardDto, EventDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::event::{EventId, EventRepository};

pub struct EventQueryService {
    repo: Arc<dyn EventRepository>,
    clock: Arc<dyn Clock>,
}

impl EventQueryService {
    pub fn new(repo: Arc<dyn EventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Events split around today: soonest upcoming first, most recent past
    /// first.
    pub async fn board(&self) -> ApplicationResult<EventBoardDto> {
        let today = self.clock.now().date_naive();
        let upcoming = self.repo.list_upcoming(today, None).await?;
        let past = self.repo.list_past(today).await?;

        Ok(EventBoardDto {
            upcoming: upcoming
                .into_iter()
                .map(|e| EventDto::from_event(e, today))
                .collect(),
            past: past
                .into_iter()
                .map(|e| EventDto::from_event(e, today))
                .collect(),
        })
    }

    pub async fn get_event(&self, id: i64) -> ApplicationResult<EventDto> {
        let id = EventId::new(id).map_err(|_| ApplicationError::not_found("event not found"))?;
        let today = self.clock.now().date_naive();
        let event = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        Ok(EventDto::from_event(event, today))
    }
}
