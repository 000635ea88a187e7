use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Free-form label for the loaded profile.
    pub profile_name: String,
    pub display: DisplayRules,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            profile_name: "base".to_string(),
            display: DisplayRules::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayRules {
    /// Rows per table page.
    pub page_size: usize,
    /// chrono format string for date cells.
    pub date_format: String,
    /// Currency symbol prefixed to price cells.
    pub currency: String,
}

impl Default for DisplayRules {
    fn default() -> Self {
        Self {
            page_size: 10,
            date_format: "%d-%b-%y".to_string(),
            currency: "$".to_string(),
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    let config = toml::from_str::<ViewerConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })?;

    if config.display.page_size == 0 {
        return Err(ConfigError::Invalid(
            "display.page_size must be at least 1".to_string(),
        ));
    }

    Ok(config)
}

pub fn default_config() -> &'static ViewerConfig {
    static DEFAULT_CONFIG: LazyLock<ViewerConfig> = LazyLock::new(ViewerConfig::default);
    &DEFAULT_CONFIG
}
