use crate::domain::model::Deployment;
use crate::utils::error::{Result, TrackError};

/// Returns the deployment with the maximum timestamp. The API does not
/// guarantee any ordering, so the scan compares explicitly; among equal
/// timestamps `max_by_key` keeps the last entry in input order, which keeps
/// the result deterministic.
pub fn latest(deployments: &[Deployment]) -> Result<&Deployment> {
    deployments
        .iter()
        .max_by_key(|d| d.created_at)
        .ok_or(TrackError::NoDeployments)
}

/// Returns the deployment whose ref equals `tag` exactly (case-sensitive).
/// If the same ref was deployed more than once, the newest deployment wins.
pub fn find_by_tag<'a>(deployments: &'a [Deployment], tag: &str) -> Result<&'a Deployment> {
    deployments
        .iter()
        .filter(|d| d.ref_name == tag)
        .max_by_key(|d| d.created_at)
        .ok_or_else(|| TrackError::TagNotDeployed {
            tag: tag.to_string(),
        })
}
