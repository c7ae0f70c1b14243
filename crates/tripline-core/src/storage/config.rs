//! TOML-based application configuration.
//!
//! Holds the collaborator endpoints: the generative parsing service and
//! the geocoding service. Stored at `~/.config/tripline/config.toml`.
//! API keys are NOT stored here; only the name of the environment
//! variable that carries one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Generative parsing service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_parser_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_parser_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

/// Geocoding service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tripline/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

fn default_parser_endpoint() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_parser_model() -> String {
    "gemini-2.5-flash".into()
}
fn default_api_key_env() -> String {
    "TRIPLINE_API_KEY".into()
}
fn default_geocoder_endpoint() -> String {
    "https://nominatim.openstreetmap.org".into()
}
fn default_user_agent() -> String {
    "tripline/0.1".into()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            endpoint: default_parser_endpoint(),
            model: default_parser_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    fn path() -> Result<std::path::PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::DataDir(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadFailed`] if the file exists but cannot
    /// be parsed, or [`ConfigError::SaveFailed`] if the default config
    /// cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns [`ConfigError::SaveFailed`] if the config cannot be
    /// serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.parser.model, "gemini-2.5-flash");
        assert_eq!(parsed.geocoder.user_agent, "tripline/0.1");
    }

    #[test]
    fn missing_sections_take_defaults() {
        let parsed: Config = toml::from_str("[parser]\nmodel = \"custom\"\n").unwrap();
        assert_eq!(parsed.parser.model, "custom");
        assert_eq!(parsed.parser.api_key_env, "TRIPLINE_API_KEY");
        assert!(parsed.geocoder.endpoint.contains("nominatim"));
    }

    #[test]
    fn first_run_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.parser.model, "gemini-2.5-flash");
        assert!(path.exists());
    }

    #[test]
    fn unparsable_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "parser = \"not a table\"").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailed { .. }));
    }

    #[test]
    fn unwritable_path_is_a_save_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("config.toml");
        let err = Config::default().save_to(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SaveFailed { .. }));
    }
}
