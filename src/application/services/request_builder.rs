//! Batch request construction
//!
//! Turns the selected feature kinds and the image sources into one
//! `images:annotate` batch. Local files are read and sent inline.

use std::collections::BTreeSet;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{
    resolve_features, AnnotateImageRequest, AnnotationRequest, DomainError, FeatureKind,
    FeatureRequest, Image, ImageReference, ImageSource, SourceKind,
};
use crate::infrastructure::traits::FileSystem;

/// Service for building the batched annotation request.
pub struct RequestBuilder {
    fs: Arc<dyn FileSystem>,
    default_feature: FeatureKind,
    max_results: Option<u32>,
}

impl RequestBuilder {
    /// Create a builder that falls back to `default_feature` when nothing is selected.
    pub fn new(fs: Arc<dyn FileSystem>, default_feature: FeatureKind) -> Self {
        Self {
            fs,
            default_feature,
            max_results: None,
        }
    }

    /// Limit the number of results per feature.
    pub fn with_max_results(mut self, max_results: Option<u32>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Feature descriptors for a selection, in canonical order.
    pub fn feature_requests(&self, selected: &BTreeSet<FeatureKind>) -> Vec<FeatureRequest> {
        resolve_features(selected, self.default_feature)
            .into_iter()
            .map(|kind| FeatureRequest::new(kind, self.max_results))
            .collect()
    }

    /// Build one batch entry per source, all sharing the same features.
    #[instrument(level = "debug", skip(self, sources), fields(sources = sources.len()))]
    pub fn build(
        &self,
        selected: &BTreeSet<FeatureKind>,
        sources: &[ImageSource],
    ) -> ApplicationResult<AnnotationRequest> {
        if sources.is_empty() {
            return Err(DomainError::NoSources.into());
        }

        let features = self.feature_requests(selected);
        debug!(
            "build: features={:?}",
            features.iter().map(|f| f.kind.wire_name()).collect::<Vec<_>>()
        );

        let requests = sources
            .iter()
            .map(|source| {
                Ok(AnnotateImageRequest {
                    image: self.image_for(source)?,
                    features: features.clone(),
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        Ok(AnnotationRequest::new(requests))
    }

    fn image_for(&self, source: &ImageSource) -> ApplicationResult<Image> {
        match source.kind() {
            SourceKind::CloudStorage(uri) => Ok(Image::Source(ImageReference::GcsImageUri(
                uri.to_string(),
            ))),
            SourceKind::Web(uri) => Ok(Image::Source(ImageReference::ImageUri(uri.to_string()))),
            SourceKind::LocalFile(path) => {
                let bytes = self.fs.read(path).with_source_context(source)?;
                debug!("image_for: read {} bytes from {}", bytes.len(), path.display());
                Ok(Image::Content(STANDARD.encode(bytes)))
            }
        }
    }
}
