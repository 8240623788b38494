//! Credentials for the Vision API
//!
//! Either an API key (sent as `x-goog-api-key`) or an already issued OAuth
//! access token (sent as a bearer token). Issuing tokens is out of scope.

use std::fmt;

use reqwest::blocking::RequestBuilder;

use crate::config::Settings;
use crate::infrastructure::{InfraError, InfraResult};

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    ApiKey(String),
    AccessToken(String),
}

impl Credentials {
    /// Pick credentials from settings; an API key wins over an access token.
    pub fn from_settings(settings: &Settings) -> InfraResult<Self> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(key) = non_empty(&settings.api_key) {
            return Ok(Self::ApiKey(key));
        }
        if let Some(token) = non_empty(&settings.access_token) {
            return Ok(Self::AccessToken(token));
        }
        Err(InfraError::credential(
            "no credentials configured: set PIGEON_API_KEY or PIGEON_ACCESS_TOKEN, \
             or api_key / access_token in the config file",
        ))
    }

    /// Attach the credentials to an outgoing request.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::ApiKey(key) => request.header("x-goog-api-key", key),
            Self::AccessToken(token) => request.bearer_auth(token),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey(_) => "api key",
            Self::AccessToken(_) => "access token",
        }
    }
}

// Never print the secret itself.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credentials({}: <redacted>)", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>, access_token: Option<&str>) -> Settings {
        Settings {
            api_key: api_key.map(String::from),
            access_token: access_token.map(String::from),
            ..Settings::default()
        }
    }

    #[test]
    fn given_api_key_and_token_when_resolving_then_prefers_api_key() {
        let creds = Credentials::from_settings(&settings(Some("key"), Some("token"))).unwrap();
        assert_eq!(creds, Credentials::ApiKey("key".into()));
    }

    #[test]
    fn given_blank_api_key_when_resolving_then_falls_back_to_token() {
        let creds = Credentials::from_settings(&settings(Some("  "), Some("token"))).unwrap();
        assert_eq!(creds, Credentials::AccessToken("token".into()));
    }

    #[test]
    fn given_nothing_configured_when_resolving_then_credential_error() {
        let err = Credentials::from_settings(&settings(None, None)).unwrap_err();
        assert!(matches!(err, InfraError::Credential { .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::ApiKey("super-secret".into());
        let printed = format!("{creds:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("api key"));
    }
}
