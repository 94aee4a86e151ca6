use crate::domain::errors::DomainResult;
use crate::domain::event::entity::{Event, EventId};
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>>;
    /// Events on or after `today`, soonest first (date, then time).
    async fn list_upcoming(&self, today: NaiveDate, limit: Option<u32>) -> DomainResult<Vec<Event>>;
    /// Events before `today`, most recent day first.
    async fn list_past(&self, today: NaiveDate) -> DomainResult<Vec<Event>>;
}
