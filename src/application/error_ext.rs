//! Error conversion helpers for reading image sources
//!
//! Provides an extension trait that attaches the offending source to I/O errors.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::ImageSource;

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Name the image source an I/O error belongs to.
    ///
    /// # Example
    /// ```ignore
    /// fs.read(path).with_source_context(&source)?;
    /// ```
    fn with_source_context(self, source: &ImageSource) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_source_context(self, source: &ImageSource) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Construction {
            source_name: source.to_string(),
            source: e,
        })
    }
}
