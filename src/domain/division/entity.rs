use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivisionId(pub i64);

impl DivisionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "division id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DivisionId> for i64 {
    fn from(value: DivisionId) -> Self {
        value.0
    }
}

/// A sub-group of the organization, displayed with its activity bullets.
#[derive(Debug, Clone)]
pub struct Division {
    pub id: DivisionId,
    /// Short unique identifier used as an anchor in the page.
    pub key: String,
    pub name: String,
    pub icon_class: String,
    pub color: String,
    pub description: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub division_id: DivisionId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Leader {
    pub id: i64,
    pub division_id: DivisionId,
    pub name: String,
    pub position: String,
    pub image: Option<String>,
}
