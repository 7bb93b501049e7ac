use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The resort dataset could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// No resort with this id in the catalog
    #[error("Unknown resort: {0}")]
    UnknownResort(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    pub(crate) fn unknown_resort(msg: impl Into<String>) -> Self {
        Self::UnknownResort(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
