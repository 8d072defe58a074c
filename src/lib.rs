pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::gitlab::GitLabClient;
pub use config::CliConfig;
pub use core::tracker::{TrackOutcome, TrackerEngine};
pub use domain::model::{Deployment, Environment, Project};
pub use domain::ports::{ConfigProvider, DeploymentApi};
pub use utils::error::{Result, TrackError};
