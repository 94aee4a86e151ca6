// tests/support/mocks/divisions.rs
use async_trait::async_trait;

use orgsite_core::domain::division::{Division, DivisionRepository, Leader, Project};
use orgsite_core::domain::errors::DomainResult;

pub struct InMemoryDivisionRepo {
    divisions: Vec<Division>,
    projects: Vec<Project>,
    leaders: Vec<Leader>,
}

impl InMemoryDivisionRepo {
    pub fn new(divisions: Vec<Division>, projects: Vec<Project>, leaders: Vec<Leader>) -> Self {
        Self {
            divisions,
            projects,
            leaders,
        }
    }
}

#[async_trait]
impl DivisionRepository for InMemoryDivisionRepo {
    async fn list_divisions(&self) -> DomainResult<Vec<Division>> {
        Ok(self.divisions.clone())
    }

    async fn list_projects(&self) -> DomainResult<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn list_leaders(&self) -> DomainResult<Vec<Leader>> {
        Ok(self.leaders.clone())
    }
}
