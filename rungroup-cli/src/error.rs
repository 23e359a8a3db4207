use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Rejected listing request (bad page or category)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Lookup by id found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Seed data could not be loaded
    #[error("Seed error: {0}")]
    Seed(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn seed(msg: impl Into<String>) -> Self {
        Self::Seed(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<rungroup_db::OperationError> for CliError {
    fn from(e: rungroup_db::OperationError) -> Self {
        Self::database(e.to_string())
    }
}

impl From<rungroup_lib::ListingError> for CliError {
    fn from(e: rungroup_lib::ListingError) -> Self {
        match e {
            rungroup_lib::ListingError::Store(e) => e.into(),
            other => Self::invalid_request(other.to_string()),
        }
    }
}
