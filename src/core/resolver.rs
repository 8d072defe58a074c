use crate::domain::model::Environment;
use crate::utils::error::{Result, TrackError};

const PRODUCTION_NAME: &str = "production";

/// Picks the production environment by case-insensitive name match. The
/// first match wins if the project carries duplicates.
pub fn find_production(environments: &[Environment]) -> Result<&Environment> {
    let mut candidates = environments
        .iter()
        .filter(|env| env.name.eq_ignore_ascii_case(PRODUCTION_NAME));

    let production = candidates.next().ok_or(TrackError::EnvironmentNotFound)?;
    if candidates.next().is_some() {
        tracing::warn!(
            "Multiple environments match '{}'; using the first (ID: {})",
            PRODUCTION_NAME,
            production.id
        );
    }

    Ok(production)
}
