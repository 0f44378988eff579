use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::filter::ALL_COLLECTIONS;
use crate::scaler::{MAX_SERVINGS, MIN_SERVINGS};

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory holding `local.json` (saved recipes) and `session.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// How long the fetching screen is shown, in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
    /// Lower bound of the servings stepper
    #[serde(default = "default_min_servings")]
    pub min_servings: u32,
    /// Upper bound of the servings stepper
    #[serde(default = "default_max_servings")]
    pub max_servings: u32,
    /// Collection tab selected when listing recipes
    #[serde(default = "default_collection")]
    pub default_collection: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            fetch_delay_ms: default_fetch_delay_ms(),
            min_servings: default_min_servings(),
            max_servings: default_max_servings(),
            default_collection: default_collection(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from(".recibook")
}

fn default_fetch_delay_ms() -> u64 {
    3000
}

fn default_min_servings() -> u32 {
    MIN_SERVINGS
}

fn default_max_servings() -> u32 {
    MAX_SERVINGS
}

fn default_collection() -> String {
    ALL_COLLECTIONS.to_string()
}

impl AppConfig {
    /// Load configuration from `recibook.toml` and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIBOOK__ prefix
/// 2. `path` if given (must exist), otherwise an optional recibook.toml in
///    the current directory
/// 3. Default values
///
/// Environment variable format: RECIBOOK__FETCH_DELAY_MS
pub fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recibook").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIBOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    if config.min_servings == 0 || config.min_servings > config.max_servings {
        return Err(ConfigError::Message(format!(
            "invalid servings bounds: min {} max {}",
            config.min_servings, config.max_servings
        )));
    }
    Ok(config)
}
