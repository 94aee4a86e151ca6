use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub i64);

impl EventId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("event id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EventId> for i64 {
    fn from(value: EventId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// An event counts as upcoming on its own day.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}
