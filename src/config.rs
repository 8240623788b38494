//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>`, else `$XDG_CONFIG_HOME/pigeon/pigeon.toml`
//! 3. Environment variables: `PIGEON_*` prefix
//!
//! The `--max-results` switch is applied on top by the CLI layer.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::FeatureKind;
use crate::infrastructure::http::VISION_API_URL;

/// Feature requested when no feature switch is given.
pub const DEFAULT_FEATURE: FeatureKind = FeatureKind::Face;

/// Unified configuration for pigeon.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// `images:annotate` endpoint URL
    pub endpoint: String,
    /// Google Cloud API key
    pub api_key: Option<String>,
    /// OAuth access token, used when no API key is set
    pub access_token: Option<String>,
    /// Feature used when no switch selects one
    pub default_feature: FeatureKind,
    /// Per-feature result limit (service default when unset)
    pub max_results: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: VISION_API_URL.to_string(),
            api_key: None,
            access_token: None,
            default_feature: DEFAULT_FEATURE,
            max_results: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Settings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &redact(&self.api_key))
            .field("access_token", &redact(&self.access_token))
            .field("default_feature", &self.default_feature)
            .field("max_results", &self.max_results)
            .finish()
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub default_feature: Option<FeatureKind>,
    pub max_results: Option<u32>,
}

/// Get the XDG config directory for pigeon.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pigeon").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("pigeon.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            endpoint: overlay
                .endpoint
                .clone()
                .unwrap_or_else(|| self.endpoint.clone()),
            api_key: overlay.api_key.clone().or_else(|| self.api_key.clone()),
            access_token: overlay
                .access_token
                .clone()
                .or_else(|| self.access_token.clone()),
            default_feature: overlay.default_feature.unwrap_or(self.default_feature),
            max_results: overlay.max_results.or(self.max_results),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist. When `None`, the
    ///   global config is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], reading `PIGEON_*` variables from `env`
    /// instead of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => global_config_path().filter(|p| p.exists()),
        };
        if let Some(path) = path {
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw);
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        Ok(current)
    }

    /// Apply PIGEON_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PIGEON")
                    .prefix_separator("_")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional(config.get_string("endpoint"))? {
            settings.endpoint = val;
        }
        if let Some(val) = optional(config.get_string("api_key"))? {
            settings.api_key = Some(val);
        }
        if let Some(val) = optional(config.get_string("access_token"))? {
            settings.access_token = Some(val);
        }
        if let Some(val) = optional(config.get_string("default_feature"))? {
            settings.default_feature = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("PIGEON_DEFAULT_FEATURE: {e}"),
            })?;
        }
        if let Some(val) = optional(config.get_int("max_results"))? {
            let max = u32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("PIGEON_MAX_RESULTS: out of range: {val}"),
            })?;
            settings.max_results = Some(max);
        }

        Ok(settings)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# pigeon configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/pigeon/pigeon.toml, or the file given with --config
#   Env:  PIGEON_* environment variables (explicit overrides)

# Vision API endpoint
# endpoint = "https://vision.googleapis.com/v1/images:annotate"

# Credentials: an API key, or an OAuth access token (api_key wins if both are set)
# api_key = "AIza..."
# access_token = "ya29..."

# Feature requested when no feature switch is given
# (face, landmark, logo, label, text, safe-search, image-properties)
# default_feature = "face"

# Maximum number of results per feature (service default when unset)
# max_results = 10
"#
        .to_string()
    }
}

/// Treat a missing key as `None`, anything else as an error.
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn given_no_overrides_when_loading_then_uses_defaults() {
        let settings = Settings::default().merge_with(&RawSettings::default());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.endpoint, VISION_API_URL);
        assert_eq!(settings.default_feature, FeatureKind::Face);
        assert!(settings.max_results.is_none());
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_field_by_field() {
        let base = Settings {
            api_key: Some("base-key".into()),
            ..Settings::default()
        };
        let overlay = RawSettings {
            default_feature: Some(FeatureKind::Label),
            max_results: Some(3),
            ..RawSettings::default()
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.api_key.as_deref(), Some("base-key"));
        assert_eq!(result.default_feature, FeatureKind::Label);
        assert_eq!(result.max_results, Some(3));
        assert_eq!(result.endpoint, VISION_API_URL);
    }

    #[test]
    fn given_env_vars_when_applying_then_replace_values() {
        let settings = Settings::apply_env_overrides(
            Settings::default(),
            env(&[
                ("PIGEON_API_KEY", "env-key"),
                ("PIGEON_DEFAULT_FEATURE", "safe-search"),
                ("PIGEON_MAX_RESULTS", "4"),
                ("PIGEON_ENDPOINT", "http://localhost:8080/v1/images:annotate"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("env-key"));
        assert_eq!(settings.default_feature, FeatureKind::SafeSearch);
        assert_eq!(settings.max_results, Some(4));
        assert_eq!(settings.endpoint, "http://localhost:8080/v1/images:annotate");
    }

    #[test]
    fn given_unknown_default_feature_in_env_when_applying_then_config_error() {
        let err = Settings::apply_env_overrides(
            Settings::default(),
            env(&[("PIGEON_DEFAULT_FEATURE", "crop-hints")]),
        )
        .unwrap_err();

        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("crop-hints"));
    }

    #[test]
    fn given_negative_max_results_in_env_when_applying_then_config_error() {
        let err = Settings::apply_env_overrides(
            Settings::default(),
            env(&[("PIGEON_MAX_RESULTS", "-1")]),
        )
        .unwrap_err();

        assert!(matches!(err, ApplicationError::Config { .. }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = Settings {
            api_key: Some("AIza-secret".into()),
            access_token: Some("ya29-secret".into()),
            ..Settings::default()
        };
        let printed = format!("{settings:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_template_parses() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.api_key.is_none());
        assert!(raw.default_feature.is_none());
    }
}
