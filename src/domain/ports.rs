use crate::domain::model::{Deployment, Environment, Project};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn project(&self) -> &str;
    fn tag(&self) -> Option<&str>;
}

/// Read-only view of the source-control platform. Implementations make
/// network calls only and retain no state beyond the current response.
#[async_trait]
pub trait DeploymentApi: Send + Sync {
    async fn get_project(&self, id_or_path: &str) -> Result<Project>;
    async fn list_environments(&self, project: &Project) -> Result<Vec<Environment>>;
    async fn list_deployments(
        &self,
        project: &Project,
        environment_id: u64,
    ) -> Result<Vec<Deployment>>;
}
