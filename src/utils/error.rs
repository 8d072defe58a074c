use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Authentication failed: {message}")]
    AuthError { message: String },

    #[error("Project '{project}' not found")]
    ProjectNotFound { project: String },

    #[error("Production environment not found")]
    EnvironmentNotFound,

    #[error("No deployments found for the production environment")]
    NoDeployments,

    #[error("Tag {tag} has not been deployed to production")]
    TagNotDeployed { tag: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Api,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackError::ApiError(_) => ErrorCategory::Api,
            TrackError::AuthError { .. } => ErrorCategory::Authentication,
            TrackError::ProjectNotFound { .. }
            | TrackError::EnvironmentNotFound
            | TrackError::NoDeployments
            | TrackError::TagNotDeployed { .. } => ErrorCategory::Lookup,
            TrackError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Lookup => ErrorSeverity::High,
            ErrorCategory::Authentication | ErrorCategory::Api => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackError::ApiError(e) => format!("The GitLab API request failed: {}", e),
            TrackError::AuthError { message } => format!("Could not authenticate: {}", message),
            TrackError::ProjectNotFound { project } => format!(
                "Project '{}' was not found or is not accessible with this token",
                project
            ),
            TrackError::EnvironmentNotFound => {
                "No environment named 'production' exists on this project".to_string()
            }
            TrackError::NoDeployments => {
                "The production environment has no deployments".to_string()
            }
            TrackError::TagNotDeployed { tag } => {
                format!("Tag {} has not been deployed to production", tag)
            }
            TrackError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid --{} value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Api => {
                "Check the GitLab instance status and try again later".to_string()
            }
            ErrorCategory::Authentication => {
                "Verify the instance URL and that the access token is valid and has read_api scope"
                    .to_string()
            }
            ErrorCategory::Lookup => {
                "Confirm the project path, environment names, and deployment history in GitLab"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Run with --help to see the expected argument formats".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackError>;
