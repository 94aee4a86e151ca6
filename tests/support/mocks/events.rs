// tests/support/mocks/events.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use orgsite_core::domain::errors::DomainResult;
use orgsite_core::domain::event::{Event, EventId, EventRepository};

pub struct InMemoryEventRepo {
    inner: Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            inner: Mutex::new(events),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepo {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let events = self.inner.lock().unwrap();
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn list_upcoming(&self, today: NaiveDate, limit: Option<u32>) -> DomainResult<Vec<Event>> {
        let events = self.inner.lock().unwrap();
        let mut upcoming: Vec<Event> = events.iter().filter(|e| e.date >= today).cloned().collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
        if let Some(limit) = limit {
            upcoming.truncate(limit as usize);
        }
        Ok(upcoming)
    }

    async fn list_past(&self, today: NaiveDate) -> DomainResult<Vec<Event>> {
        let events = self.inner.lock().unwrap();
        let mut past: Vec<Event> = events.iter().filter(|e| e.date < today).cloned().collect();
        past.sort_by(|a, b| b.date.cmp(&a.date).then(a.time.cmp(&b.time)));
        Ok(past)
    }
}
