//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::RequestBuilder;
use crate::config::Settings;
use crate::infrastructure::client::AnnotationClient;
use crate::infrastructure::traits::{AnnotateTransport, FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Preset transport; `None` connects over HTTP on first use
    transport: Option<Arc<dyn AnnotateTransport>>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            fs: Arc::new(RealFileSystem),
            transport: None,
        }
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        transport: Arc<dyn AnnotateTransport>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
            transport: Some(transport),
        }
    }

    /// Request builder using the configured default feature.
    ///
    /// `max_results` overrides the configured limit when set.
    pub fn request_builder(&self, max_results: Option<u32>) -> RequestBuilder {
        RequestBuilder::new(self.fs.clone(), self.settings.default_feature)
            .with_max_results(max_results.or(self.settings.max_results))
    }

    /// Annotation client; connecting resolves credentials.
    pub fn annotation_client(&self) -> InfraResult<AnnotationClient> {
        match &self.transport {
            Some(transport) => Ok(AnnotationClient::with_transport(transport.clone())),
            None => AnnotationClient::connect(&self.settings),
        }
    }
}
