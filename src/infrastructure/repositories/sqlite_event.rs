use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{Event, EventId};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteEventRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteEventRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    title: String,
    description: String,
    image_url: String,
    date: NaiveDate,
    time: NaiveTime,
    location: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::new(row.id)?,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            date: row.date,
            time: row.time,
            location: row.location,
            created_at: row.created_at,
        })
    }
}

const EVENT_COLUMNS: &str = "id, title, description, image_url, date, time, location, created_at";

#[async_trait]
impl crate::domain::event::EventRepository for SqliteEventRepository {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Event::try_from).transpose()
    }

    async fn list_upcoming(&self, today: NaiveDate, limit: Option<u32>) -> DomainResult<Vec<Event>> {
        let mut sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE date >= ? ORDER BY date ASC, time ASC"
        );
        if limit.is_some() {
            sql.push_str(" LIMIT ?");
        }

        let mut query = sqlx::query_as::<_, EventRow>(&sql).bind(today);
        if let Some(limit) = limit {
            query = query.bind(i64::from(limit));
        }

        let rows = query.fetch_all(&*self.pool).await.map_err(map_sqlx)?;
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn list_past(&self, today: NaiveDate) -> DomainResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE date < ? ORDER BY date DESC, time ASC"
        ))
        .bind(today)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
