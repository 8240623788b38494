//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid inputs independent of any I/O.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no image sources given")]
    NoSources,

    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}
