use crate::domain::division::entity::{Division, Leader, Project};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DivisionRepository: Send + Sync {
    /// All divisions with their activities attached.
    async fn list_divisions(&self) -> DomainResult<Vec<Division>>;
    async fn list_projects(&self) -> DomainResult<Vec<Project>>;
    async fn list_leaders(&self) -> DomainResult<Vec<Leader>>;
}
