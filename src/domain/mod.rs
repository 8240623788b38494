//! Domain layer: features, image sources and the batch wire shapes
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod feature;
pub mod image;
pub mod request;

pub use error::DomainError;
pub use feature::{resolve_features, FeatureKind, FeatureRequest};
pub use image::{ImageSource, SourceKind};
pub use request::{AnnotateImageRequest, AnnotationRequest, AnnotationResponse, Image, ImageReference};
