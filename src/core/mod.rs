pub mod query;
pub mod resolver;
pub mod tracker;

pub use crate::domain::model::{Deployment, Environment, Project};
pub use crate::domain::ports::{ConfigProvider, DeploymentApi};
pub use crate::utils::error::Result;
pub use tracker::{TrackOutcome, TrackerEngine};
