//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use crate::domain::{AnnotationRequest, AnnotationResponse};
use crate::infrastructure::InfraResult;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Remote annotation endpoint.
///
/// One call submits one batch and blocks until the whole batch response
/// arrives or the call fails.
pub trait AnnotateTransport: Send + Sync {
    fn annotate(&self, request: &AnnotationRequest) -> InfraResult<AnnotationResponse>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
