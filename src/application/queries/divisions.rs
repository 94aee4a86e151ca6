use std::sync::Arc;

use crate::application::dto::{DivisionDto, DivisionsOverviewDto, LeaderDto, ProjectDto};
use crate::application::error::ApplicationResult;
use crate::domain::division::DivisionRepository;

pub struct DivisionQueryService {
    repo: Arc<dyn DivisionRepository>,
}

impl DivisionQueryService {
    pub fn new(repo: Arc<dyn DivisionRepository>) -> Self {
        Self { repo }
    }

    /// The divisions page: every division with its activities, plus all
    /// projects and leaders tagged by division.
    pub async fn overview(&self) -> ApplicationResult<DivisionsOverviewDto> {
        let divisions = self.repo.list_divisions().await?;
        let projects = self.repo.list_projects().await?;
        let leaders = self.repo.list_leaders().await?;

        Ok(DivisionsOverviewDto {
            divisions: divisions.into_iter().map(DivisionDto::from).collect(),
            projects: projects.into_iter().map(ProjectDto::from).collect(),
            leaders: leaders.into_iter().map(LeaderDto::from).collect(),
        })
    }
}
