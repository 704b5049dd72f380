use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FinderConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for the TheMealDB client
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL the four endpoints are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

pub(crate) fn default_user_agent() -> String {
    concat!("meal-finder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl FinderConfig {
    /// Load configuration from `meal-finder.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEAL_FINDER__ prefix
    /// 2. meal-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEAL_FINDER__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Same as [`FinderConfig::load`] but reads the given file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

fn load_config(path: Option<&Path>) -> Result<FinderConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("meal-finder").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: MEAL_FINDER__API__TIMEOUT_SECS
        .add_source(
            Environment::with_prefix("MEAL_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = FinderConfig::default();
        assert_eq!(
            config.api.base_url,
            "https://www.themealdb.com/api/json/v1/1"
        );
        assert!(config.api.timeout_secs.is_none());
        assert!(config.api.timeout().is_none());
        assert!(config.api.user_agent.starts_with("meal-finder/"));
    }

    #[test]
    fn test_timeout_conversion() {
        let api = ApiConfig {
            timeout_secs: Some(12),
            ..Default::default()
        };
        assert_eq!(api.timeout(), Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("meal-finder-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:9999/api\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = FinderConfig::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9999/api");
        assert_eq!(config.api.timeout_secs, Some(5));
        // Missing keys fall back to defaults
        assert!(config.api.user_agent.starts_with("meal-finder/"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let result = FinderConfig::load_from(Path::new("/nonexistent/meal-finder.toml"));
        assert!(result.is_err());
    }
}
