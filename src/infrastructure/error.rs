//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add network-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("unable to retrieve vision service: {message}")]
    Credential { message: String },

    #[error("unable to execute images annotate request: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    #[error("unable to render the response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InfraError {
    /// Create a credential error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create a transport error without an HTTP status.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            status: None,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;
