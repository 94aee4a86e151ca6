use crate::domain::division::{Division, Leader, Project};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DivisionDto {
    pub id: i64,
    pub key: String,
    pub name: String,
    pub icon_class: String,
    pub color: String,
    pub description: String,
    pub activities: Vec<String>,
}

impl From<Division> for DivisionDto {
    fn from(division: Division) -> Self {
        Self {
            id: division.id.into(),
            key: division.key,
            name: division.name,
            icon_class: division.icon_class,
            color: division.color,
            description: division.description,
            activities: division
                .activities
                .into_iter()
                .map(|a| a.description)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i64,
    pub division_id: i64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            division_id: project.division_id.into(),
            title: project.title,
            description: project.description,
            image: project.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderDto {
    pub id: i64,
    pub division_id: i64,
    pub name: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Leader> for LeaderDto {
    fn from(leader: Leader) -> Self {
        Self {
            id: leader.id,
            division_id: leader.division_id.into(),
            name: leader.name,
            position: leader.position,
            image: leader.image,
        }
    }
}

/// Everything the divisions page renders in one response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DivisionsOverviewDto {
    pub divisions: Vec<DivisionDto>,
    pub projects: Vec<ProjectDto>,
    pub leaders: Vec<LeaderDto>,
}
