use crate::domain::event::Event;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub is_upcoming: bool,
    pub created_at: DateTime<Utc>,
}

impl EventDto {
    pub fn from_event(event: Event, today: NaiveDate) -> Self {
        let is_upcoming = event.is_upcoming(today);
        Self {
            id: event.id.into(),
            title: event.title,
            description: event.description,
            image_url: event.image_url,
            date: event.date,
            time: event.time,
            location: event.location,
            is_upcoming,
            created_at: event.created_at,
        }
    }
}

/// Upcoming and past events, already partitioned for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventBoardDto {
    pub upcoming: Vec<EventDto>,
    pub past: Vec<EventDto>,
}
