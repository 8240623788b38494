//! Detection features understood by the Vision API

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DomainError;

/// A detection capability of the remote service.
///
/// Declaration order is the canonical order: sets of kinds iterate in this
/// order, and so do the feature lists sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeatureKind {
    Face,
    Landmark,
    Logo,
    Label,
    Text,
    SafeSearch,
    ImageProperties,
}

impl FeatureKind {
    /// Every kind, in canonical order.
    pub const ALL: [FeatureKind; 7] = [
        FeatureKind::Face,
        FeatureKind::Landmark,
        FeatureKind::Logo,
        FeatureKind::Label,
        FeatureKind::Text,
        FeatureKind::SafeSearch,
        FeatureKind::ImageProperties,
    ];

    /// Feature type name used by the `images:annotate` endpoint.
    pub fn wire_name(self) -> &'static str {
        match self {
            FeatureKind::Face => "FACE_DETECTION",
            FeatureKind::Landmark => "LANDMARK_DETECTION",
            FeatureKind::Logo => "LOGO_DETECTION",
            FeatureKind::Label => "LABEL_DETECTION",
            FeatureKind::Text => "TEXT_DETECTION",
            FeatureKind::SafeSearch => "SAFE_SEARCH_DETECTION",
            FeatureKind::ImageProperties => "IMAGE_PROPERTIES",
        }
    }

    /// Name of the command-line switch (and config value) for this kind.
    pub fn flag_name(self) -> &'static str {
        match self {
            FeatureKind::Face => "face",
            FeatureKind::Landmark => "landmark",
            FeatureKind::Logo => "logo",
            FeatureKind::Label => "label",
            FeatureKind::Text => "text",
            FeatureKind::SafeSearch => "safe-search",
            FeatureKind::ImageProperties => "image-properties",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag_name())
    }
}

impl FromStr for FeatureKind {
    type Err = DomainError;

    /// Accepts the switch name (`safe-search`) or the wire name
    /// (`SAFE_SEARCH_DETECTION`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FeatureKind::ALL
            .iter()
            .copied()
            .find(|kind| {
                kind.flag_name().eq_ignore_ascii_case(needle)
                    || kind.wire_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownFeature(s.to_string()))
    }
}

impl Serialize for FeatureKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.flag_name())
    }
}

impl<'de> Deserialize<'de> for FeatureKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One feature descriptor as sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRequest {
    pub kind: FeatureKind,
    /// Upper bound on results for this kind; `None` leaves it to the service.
    pub max_results: Option<u32>,
}

impl FeatureRequest {
    pub fn new(kind: FeatureKind, max_results: Option<u32>) -> Self {
        Self { kind, max_results }
    }
}

impl Serialize for FeatureRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let len = if self.max_results.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.kind.wire_name())?;
        if let Some(max) = self.max_results {
            map.serialize_entry("maxResults", &max)?;
        }
        map.end()
    }
}

/// Resolve the kinds to request: the selection itself, or only `default`
/// when nothing was selected.
pub fn resolve_features(selected: &BTreeSet<FeatureKind>, default: FeatureKind) -> Vec<FeatureKind> {
    if selected.is_empty() {
        vec![default]
    } else {
        selected.iter().copied().collect()
    }
}
