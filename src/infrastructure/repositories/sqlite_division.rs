use crate::domain::division::{Activity, Division, DivisionId, Leader, Project};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteDivisionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDivisionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DivisionRow {
    id: i64,
    key: String,
    name: String,
    icon_class: String,
    color: String,
    description: String,
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    division_id: i64,
    description: String,
}

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    division_id: i64,
    title: String,
    description: String,
    image: Option<String>,
}

#[derive(Debug, FromRow)]
struct LeaderRow {
    id: i64,
    division_id: i64,
    name: String,
    position: String,
    image: Option<String>,
}

#[async_trait]
impl crate::domain::division::DivisionRepository for SqliteDivisionRepository {
    async fn list_divisions(&self) -> DomainResult<Vec<Division>> {
        let division_rows = sqlx::query_as::<_, DivisionRow>(
            "SELECT id, key, name, icon_class, color, description FROM divisions ORDER BY name ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let activity_rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, division_id, description FROM activities ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut divisions = division_rows
            .into_iter()
            .map(|row| {
                Ok(Division {
                    id: DivisionId::new(row.id)?,
                    key: row.key,
                    name: row.name,
                    icon_class: row.icon_class,
                    color: row.color,
                    description: row.description,
                    activities: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        for activity in activity_rows {
            if let Some(division) = divisions
                .iter_mut()
                .find(|d| i64::from(d.id) == activity.division_id)
            {
                division.activities.push(Activity {
                    id: activity.id,
                    description: activity.description,
                });
            }
        }

        Ok(divisions)
    }

    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, division_id, title, description, image FROM projects ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(Project {
                    id: row.id,
                    division_id: DivisionId::new(row.division_id)?,
                    title: row.title,
                    description: row.description,
                    image: row.image,
                })
            })
            .collect()
    }

    async fn list_leaders(&self) -> DomainResult<Vec<Leader>> {
        let rows = sqlx::query_as::<_, LeaderRow>(
            "SELECT id, division_id, name, position, image FROM leaders ORDER BY id ASC",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(Leader {
                    id: row.id,
                    division_id: DivisionId::new(row.division_id)?,
                    name: row.name,
                    position: row.position,
                    image: row.image,
                })
            })
            .collect()
    }
}
