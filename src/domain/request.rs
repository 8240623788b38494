//! Batch request and response shapes of `images:annotate`

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FeatureRequest;

/// Where the service finds the image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Image {
    /// Base64-encoded image bytes
    #[serde(rename = "content")]
    Content(String),
    /// Reference the service resolves itself
    #[serde(rename = "source")]
    Source(ImageReference),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageReference {
    GcsImageUri(String),
    ImageUri(String),
}

/// One entry of the batch: an image plus the features to run on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<FeatureRequest>,
}

/// The batch sent in a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRequest {
    requests: Vec<AnnotateImageRequest>,
}

impl AnnotationRequest {
    pub fn new(requests: Vec<AnnotateImageRequest>) -> Self {
        Self { requests }
    }

    pub fn entries(&self) -> &[AnnotateImageRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// The batch result, index-aligned with the request.
///
/// Entries are opaque: annotations or a per-image `error` object, kept
/// exactly as the service sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationResponse {
    #[serde(default)]
    pub responses: Vec<Value>,
}

impl AnnotationResponse {
    pub fn new(responses: Vec<Value>) -> Self {
        Self { responses }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}
