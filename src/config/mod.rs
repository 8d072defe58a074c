use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_tag_format, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "deploy-track")]
#[command(about = "Track tag deployments to production in GitLab")]
pub struct CliConfig {
    #[arg(long, help = "GitLab instance URL (e.g., https://gitlab.com)")]
    pub url: String,

    #[arg(long, help = "GitLab personal access token")]
    pub token: String,

    #[arg(long, help = "GitLab project ID or path (e.g., group/project)")]
    pub project: String,

    #[arg(long, help = "Specific tag to check (e.g., v1.2.3)")]
    pub tag: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn project(&self) -> &str {
        &self.project
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        validate_non_empty_string("token", &self.token)?;
        validate_non_empty_string("project", &self.project)?;

        if let Some(tag) = &self.tag {
            validate_tag_format("tag", tag)?;
        }

        Ok(())
    }
}
