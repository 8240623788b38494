//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(DomainError::NoSources) => crate::exitcode::NOINPUT,
                    ApplicationError::Domain(DomainError::UnknownFeature(_)) => {
                        crate::exitcode::CONFIG
                    }
                    ApplicationError::Construction { .. } => crate::exitcode::NOINPUT,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
                InfraError::Credential { .. } => crate::exitcode::NOPERM,
                InfraError::Transport { .. } => crate::exitcode::UNAVAILABLE,
                InfraError::Serialization(_) => crate::exitcode::DATAERR,
            },
        }
    }
}
