//! Annotation client: connect, submit one batch, render the result

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::Settings;
use crate::domain::{AnnotationRequest, AnnotationResponse};
use crate::infrastructure::credentials::Credentials;
use crate::infrastructure::http::HttpTransport;
use crate::infrastructure::traits::AnnotateTransport;
use crate::infrastructure::InfraResult;

pub struct AnnotationClient {
    transport: Arc<dyn AnnotateTransport>,
}

impl AnnotationClient {
    /// Resolve credentials and open an HTTP transport to the configured endpoint.
    pub fn connect(settings: &Settings) -> InfraResult<Self> {
        let credentials = Credentials::from_settings(settings)?;
        let transport = HttpTransport::connect(settings.endpoint.clone(), credentials)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Use an existing transport (stubs in tests).
    pub fn with_transport(transport: Arc<dyn AnnotateTransport>) -> Self {
        Self { transport }
    }

    /// Submit the batch and wait for its response. No retries.
    #[instrument(level = "debug", skip_all, fields(entries = request.len()))]
    pub fn annotate(&self, request: &AnnotationRequest) -> InfraResult<AnnotationResponse> {
        let response = self.transport.annotate(request)?;
        if response.len() != request.len() {
            warn!(
                "response has {} entries for {} requested images",
                response.len(),
                request.len()
            );
        }
        info!("annotated {} images", response.len());
        Ok(response)
    }

    /// Pretty-print the per-image responses with two-space indentation.
    ///
    /// The output always ends with a newline and is byte-identical for equal input.
    pub fn render(response: &AnnotationResponse) -> InfraResult<String> {
        let mut text = serde_json::to_string_pretty(&response.responses)?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_empty_response() {
        let text = AnnotationClient::render(&AnnotationResponse::default()).unwrap();
        assert_eq!(text, "[]\n");
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let response = AnnotationResponse::new(vec![json!({"faceAnnotations": []})]);
        let text = AnnotationClient::render(&response).unwrap();
        assert_eq!(text, "[\n  {\n    \"faceAnnotations\": []\n  }\n]\n");
    }

    #[test]
    fn test_render_preserves_key_order() {
        let body = r#"{"responses":[{"zeta":1,"alpha":2}]}"#;
        let response: AnnotationResponse = serde_json::from_str(body).unwrap();
        let text = AnnotationClient::render(&response).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
    }
}
