//! HTTP transport for `images:annotate`

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::{AnnotationRequest, AnnotationResponse};
use crate::infrastructure::credentials::Credentials;
use crate::infrastructure::traits::AnnotateTransport;
use crate::infrastructure::{InfraError, InfraResult};

/// Google Cloud Vision API batch annotate URL
pub const VISION_API_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

/// Blocking HTTP client bound to one endpoint and one set of credentials.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpTransport {
    /// Build the underlying HTTP client.
    ///
    /// No request is sent here; the transport's default timeouts apply.
    pub fn connect(endpoint: impl Into<String>, credentials: Credentials) -> InfraResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("pigeon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InfraError::credential(format!("failed to create HTTP client: {e}")))?;

        let endpoint = endpoint.into();
        debug!("connect: endpoint={} auth={}", endpoint, credentials.kind());
        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnnotateTransport for HttpTransport {
    #[instrument(level = "debug", skip_all, fields(entries = request.len()))]
    fn annotate(&self, request: &AnnotationRequest) -> InfraResult<AnnotationResponse> {
        let response = self
            .credentials
            .authorize(self.client.post(&self.endpoint))
            .json(request)
            .send()
            .map_err(|e| InfraError::transport(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| InfraError::transport(format!("failed to read response: {e}")))?;
        debug!("annotate: status={} body_len={}", status, body.len());

        decode_response(status.as_u16(), &body)
    }
}

/// Turn a raw HTTP status and body into a batch response.
///
/// Non-2xx statuses become transport errors carrying the service's own
/// error message when the body has one.
pub fn decode_response(status: u16, body: &str) -> InfraResult<AnnotationResponse> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ApiError>(body) {
            Ok(err) => match err.error.status {
                Some(code) => format!("{} ({})", err.error.message, code),
                None => err.error.message,
            },
            Err(_) => body.trim().to_string(),
        };
        return Err(InfraError::Transport {
            message: format!("HTTP {status}: {message}"),
            status: Some(status),
        });
    }

    serde_json::from_str(body)
        .map_err(|e| InfraError::transport(format!("malformed response: {e}")))
}
