//! Image sources as given on the command line

use std::fmt;
use std::path::Path;

/// One operator-supplied image reference, kept verbatim.
///
/// No existence or format check happens locally; the service validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource(String);

/// How an [`ImageSource`] is handed to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind<'a> {
    /// `gs://bucket/object`, passed by reference
    CloudStorage(&'a str),
    /// `http(s)://...`, fetched by the service
    Web(&'a str),
    /// Anything else: a local file whose bytes are sent inline
    LocalFile(&'a Path),
}

impl ImageSource {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> SourceKind<'_> {
        let raw = self.0.as_str();
        if has_scheme(raw, "gs://") {
            SourceKind::CloudStorage(raw)
        } else if has_scheme(raw, "http://") || has_scheme(raw, "https://") {
            SourceKind::Web(raw)
        } else {
            SourceKind::LocalFile(Path::new(raw))
        }
    }

    /// True when the image bytes must be read locally and sent inline.
    pub fn is_local(&self) -> bool {
        matches!(self.kind(), SourceKind::LocalFile(_))
    }
}

fn has_scheme(raw: &str, scheme: &str) -> bool {
    raw.get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageSource {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ImageSource {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("gs://bucket/cat.jpg", true, false)]
    #[case("GS://bucket/cat.jpg", true, false)]
    #[case("https://example.com/cat.jpg", false, true)]
    #[case("http://example.com/cat.jpg", false, true)]
    fn test_remote_sources(#[case] raw: &str, #[case] gcs: bool, #[case] web: bool) {
        let source = ImageSource::new(raw);
        assert_eq!(matches!(source.kind(), SourceKind::CloudStorage(_)), gcs);
        assert_eq!(matches!(source.kind(), SourceKind::Web(_)), web);
        assert!(!source.is_local());
    }

    #[rstest]
    #[case("photo.jpg")]
    #[case("./images/photo.png")]
    #[case("/tmp/gs:/odd.jpg")]
    #[case("gs:/missing-slash.jpg")]
    fn test_local_sources(#[case] raw: &str) {
        let source = ImageSource::new(raw);
        assert_eq!(source.kind(), SourceKind::LocalFile(Path::new(raw)));
        assert!(source.is_local());
    }

    #[test]
    fn test_source_is_kept_verbatim() {
        let source = ImageSource::from("  spaced name.jpg");
        assert_eq!(source.as_str(), "  spaced name.jpg");
        assert_eq!(source.to_string(), "  spaced name.jpg");
    }
}
