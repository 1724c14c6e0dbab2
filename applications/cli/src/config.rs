/// Application configuration
use hitster_catalog::{CatalogConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hitster.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub game: GameSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameSettings {
    /// Fixed seed for replayable draws
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `hitster.toml` is used when
    /// present. `HITSTER_`-prefixed variables override the file, with `__`
    /// between section and key (`HITSTER_CATALOG__ACCESS_TOKEN`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("HITSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.catalog.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::Invalid(
                    "catalog access token is required (set HITSTER_CATALOG__ACCESS_TOKEN or --token)"
                        .to_string(),
                ))
            }
        }

        if self.catalog.page_limit == 0 {
            return Err(ConfigError::Invalid(
                "catalog.page_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Catalog client settings
    pub fn catalog_config(&self) -> CatalogConfig {
        let mut config =
            CatalogConfig::new(self.catalog.api_base_url.clone()).page_limit(self.catalog.page_limit);
        if let Some(token) = &self.catalog.access_token {
            config = config.access_token(token.clone());
        }
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            game: GameSettings::default(),
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        api_base_url: default_api_base_url(),
        access_token: None,
        page_limit: default_page_limit(),
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_config_file() {
        let file = write_config(
            r#"
[catalog]
api_base_url = "http://localhost:9000/v1"
access_token = "abc"
page_limit = 20

[game]
seed = 42
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.catalog.api_base_url, "http://localhost:9000/v1");
        assert_eq!(config.catalog.access_token.as_deref(), Some("abc"));
        assert_eq!(config.catalog.page_limit, 20);
        assert_eq!(config.game.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let file = write_config("[catalog]\naccess_token = \"abc\"\n");

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.catalog.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.catalog.page_limit, DEFAULT_PAGE_LIMIT);
        assert!(config.game.seed.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/definitely/not/here/hitster.toml")));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_validate_requires_token() {
        let config = AppConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.catalog.access_token = Some("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_catalog_config_carries_token() {
        let mut config = AppConfig::default();
        config.catalog.access_token = Some("tok".to_string());

        let catalog = config.catalog_config();
        assert_eq!(catalog.access_token.as_deref(), Some("tok"));
        assert_eq!(catalog.api_base_url, DEFAULT_API_BASE_URL);
    }
}
