use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: u64,
    pub name: String,
}

/// A record that a ref was deployed to an environment. The ref is opaque
/// text as far as this tool is concerned; it is only ever string-compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub created_at: DateTime<Utc>,
}

impl Deployment {
    pub fn deployed_at(&self) -> String {
        self.created_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
