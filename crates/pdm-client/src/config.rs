//! Client configuration.
//!
//! [`ClientConfig`] is the value handed to [`crate::OrchestrationClient`];
//! [`PdmConfig`] is the TOML file format it can be resolved from.
//!
//! Base URL precedence, highest first:
//! 1. Explicit override (the `--api-base` flag)
//! 2. `PDM_API_BASE` environment variable
//! 3. Local config file (`./.pdmrc`)
//! 4. Global config file (`~/.pdm/config.toml`)
//! 5. `http://localhost:8000`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Default orchestration API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "PDM_API_BASE";

/// Settings injected into the orchestration client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    /// Base URL of the orchestration API, without a trailing slash.
    pub api_base: String,
    /// Reject successful responses that fail schema validation.
    pub strict_schema: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(), strict_schema: false }
    }
}

impl ClientConfig {
    /// Creates a config for the given base URL after normalising it.
    pub fn new(api_base: impl AsRef<str>) -> ConfigResult<Self> {
        Ok(Self { api_base: normalize_api_base(api_base.as_ref())?, strict_schema: false })
    }

    /// Enables or disables strict response validation.
    #[must_use]
    pub fn with_strict_schema(mut self, strict: bool) -> Self {
        self.strict_schema = strict;
        self
    }

    /// Resolves the effective client config.
    ///
    /// `env` is consulted for [`API_BASE_ENV`]; pass `|k| std::env::var(k).ok()`
    /// in binaries and a closure over fixed values in tests.
    pub fn resolve<F>(override_base: Option<&str>, file: &PdmConfig, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = override_base
            .map(ToString::to_string)
            .or_else(|| env(API_BASE_ENV).filter(|v| !v.trim().is_empty()))
            .or_else(|| file.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self::new(raw)?.with_strict_schema(file.strict_schema.unwrap_or(false)))
    }

    /// Full URL for an endpoint path such as `/orchestrate`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

/// Strips whitespace and trailing slashes and checks the scheme.
pub fn normalize_api_base(raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue("api_base must not be empty".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidValue(format!(
            "api_base must start with http:// or https://, got '{}'",
            trimmed
        )));
    }
    Ok(trimmed.to_string())
}

/// On-disk configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PdmConfig {
    /// Orchestration API base URL
    #[serde(default)]
    pub api_base: Option<String>,

    /// Reject responses missing expected fields
    #[serde(default)]
    pub strict_schema: Option<bool>,

    /// Log level
    #[serde(default)]
    pub log_level: Option<String>,

    /// Output format preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output format configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format (human, json)
    #[serde(default)]
    pub format: Option<String>,
}

impl OutputConfig {
    /// Whether JSON output is the configured default.
    pub fn is_json(&self) -> bool {
        self.format.as_deref() == Some("json")
    }
}

impl PdmConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Get default global configuration file path.
    pub fn default_global_path() -> PathBuf {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".pdm")
            .join("config.toml")
    }

    /// Get default local configuration file path.
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".pdmrc")
    }

    /// Discover and load the global then the local config file.
    ///
    /// Missing files are skipped; unreadable or malformed ones are returned as errors
    /// so a typo in `.pdmrc` does not silently fall back to defaults.
    pub fn discover_and_load() -> ConfigResult<Self> {
        Self::load_layers(&[Self::default_global_path(), Self::default_local_path()])
    }

    /// Load and merge the given files in order; later files win.
    pub fn load_layers(paths: &[PathBuf]) -> ConfigResult<Self> {
        let mut config = Self::default();
        for path in paths {
            match Self::load_from_file(path) {
                Ok(layer) => config.merge(&layer),
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(config)
    }

    /// Merge another configuration into this one.
    ///
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &Self) {
        if let Some(ref api_base) = other.api_base {
            self.api_base = Some(api_base.clone());
        }
        if let Some(strict) = other.strict_schema {
            self.strict_schema = Some(strict);
        }
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
        if let Some(ref format) = other.output.format {
            self.output.format = Some(format.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_api_base() {
        let config = ClientConfig::resolve(None, &PdmConfig::default(), no_env).unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
        assert!(!config.strict_schema);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = PdmConfig { api_base: Some("http://file:9000".to_string()), ..Default::default() };
        let config = ClientConfig::resolve(None, &file, |key| {
            (key == API_BASE_ENV).then(|| "http://env:7000".to_string())
        })
        .unwrap();
        assert_eq!(config.api_base, "http://env:7000");
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = ClientConfig::resolve(
            Some("https://flag.example"),
            &PdmConfig::default(),
            |_| Some("http://env:7000".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_base, "https://flag.example");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let file = PdmConfig { api_base: Some("http://file:9000".to_string()), ..Default::default() };
        let config = ClientConfig::resolve(None, &file, |_| Some("  ".to_string())).unwrap();
        assert_eq!(config.api_base, "http://file:9000");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_api_base(" http://host:8000/ ").unwrap(), "http://host:8000");
        assert_eq!(normalize_api_base("https://host/api//").unwrap(), "https://host/api");
    }

    #[test]
    fn test_normalize_rejects_bad_scheme() {
        assert!(matches!(normalize_api_base("localhost:8000"), Err(ConfigError::InvalidValue(_))));
        assert!(matches!(normalize_api_base(""), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_endpoint_joins_path() {
        let config = ClientConfig::new("http://host:8000/").unwrap();
        assert_eq!(config.endpoint("/orchestrate"), "http://host:8000/orchestrate");
        assert_eq!(config.endpoint("health"), "http://host:8000/health");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
api_base = "http://10.0.0.5:8000"
strict_schema = true
log_level = "debug"

[output]
format = "json"
"#;
        std::fs::write(&config_path, config_content).unwrap();

        let config = PdmConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.api_base, Some("http://10.0.0.5:8000".to_string()));
        assert_eq!(config.strict_schema, Some(true));
        assert_eq!(config.log_level, Some("debug".to_string()));
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = PdmConfig::load_from_file(&temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "api_base = [").unwrap();
        assert!(matches!(PdmConfig::load_from_file(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_layers_local_overrides_global() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join(".pdmrc");
        std::fs::write(&global, "api_base = \"http://global:1\"\nlog_level = \"info\"\n").unwrap();
        std::fs::write(&local, "api_base = \"http://local:2\"\n").unwrap();

        let config = PdmConfig::load_layers(&[global, local, temp_dir.path().join("missing")]).unwrap();
        assert_eq!(config.api_base, Some("http://local:2".to_string()));
        assert_eq!(config.log_level, Some("info".to_string()));
    }

    #[test]
    fn test_local_human_format_overrides_global_json() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join(".pdmrc");
        std::fs::write(&global, "[output]\nformat = \"json\"\n").unwrap();
        std::fs::write(&local, "[output]\nformat = \"human\"\n").unwrap();

        let config = PdmConfig::load_layers(&[global.clone()]).unwrap();
        assert!(config.output.is_json());

        let config = PdmConfig::load_layers(&[global, local]).unwrap();
        assert_eq!(config.output.format.as_deref(), Some("human"));
        assert!(!config.output.is_json());
    }

    #[test]
    fn test_unset_format_keeps_lower_layer() {
        let mut config = PdmConfig { output: OutputConfig { format: Some("json".to_string()) }, ..Default::default() };
        config.merge(&PdmConfig::default());
        assert!(config.output.is_json());
    }

    #[test]
    fn test_strict_schema_from_file() {
        let file = PdmConfig { strict_schema: Some(true), ..Default::default() };
        let config = ClientConfig::resolve(None, &file, no_env).unwrap();
        assert!(config.strict_schema);
    }
}
