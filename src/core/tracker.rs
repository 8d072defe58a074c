use crate::core::{query, resolver};
use crate::domain::ports::{ConfigProvider, DeploymentApi};
use crate::utils::error::{Result, TrackError};

/// What a completed run concluded. Failures that are answers ("that tag was
/// never deployed") end up here; failures that are faults stay errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    LatestReported,
    TagDeployed,
    TagNotDeployed,
    NoDeployments,
}

impl TrackOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackOutcome::LatestReported | TrackOutcome::TagDeployed => 0,
            TrackOutcome::TagNotDeployed | TrackOutcome::NoDeployments => 1,
        }
    }
}

pub struct TrackerEngine<A: DeploymentApi, C: ConfigProvider> {
    api: A,
    config: C,
}

impl<A: DeploymentApi, C: ConfigProvider> TrackerEngine<A, C> {
    pub fn new(api: A, config: C) -> Self {
        Self { api, config }
    }

    /// Runs the query sequence and prints one fact per line to stdout as
    /// each step succeeds. Steps are strictly ordered; the first failure
    /// ends the run with whatever was already printed.
    pub async fn run(&self) -> Result<TrackOutcome> {
        tracing::info!("Checking deployments for project {}", self.config.project());

        // 取得專案
        let project = self.api.get_project(self.config.project()).await?;
        println!("Connected to project: {}", project.name);

        // 找出 production 環境
        let environments = self.api.list_environments(&project).await?;
        tracing::debug!("Project has {} environments", environments.len());
        let production = resolver::find_production(&environments)?;
        println!("Found production environment (ID: {})", production.id);

        let deployments = self
            .api
            .list_deployments(&project, production.id)
            .await?;
        tracing::debug!("Fetched {} deployments", deployments.len());

        let latest = match query::latest(&deployments) {
            Ok(found) => found,
            Err(TrackError::NoDeployments) => {
                println!("No deployments found for the production environment.");
                return Ok(TrackOutcome::NoDeployments);
            }
            Err(e) => return Err(e),
        };
        println!(
            "Latest tag deployed to production: {} (deployed at {})",
            latest.ref_name,
            latest.deployed_at()
        );

        // 沒有指定 tag 時只回報最新部署
        let Some(tag) = self.config.tag() else {
            return Ok(TrackOutcome::LatestReported);
        };

        match query::find_by_tag(&deployments, tag) {
            Ok(found) => {
                println!(
                    "Tag {} was deployed to production at {}",
                    tag,
                    found.deployed_at()
                );
                Ok(TrackOutcome::TagDeployed)
            }
            Err(TrackError::TagNotDeployed { .. }) => {
                println!("Tag {} was NOT deployed to production", tag);
                Ok(TrackOutcome::TagNotDeployed)
            }
            Err(e) => Err(e),
        }
    }
}
