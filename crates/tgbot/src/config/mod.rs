pub mod types;
use crate::error::Result;
use types::APP_FOLDER;
pub use types::{CONFIG, Config, KeyboardConfig, LogConfig, LogFormat};

impl Config {
    /// Load config from the file named by `TGBOT_CONFIG`, or defaults
    pub fn new() -> Self {
        get_config().unwrap_or_else(|e| {
            tracing::debug!("Using default config: {}", e);
            Config::default()
        })
    }
}

pub fn get_config() -> Result<Config> {
    std::env::var(APP_FOLDER)
        // Read config file to string
        .map(std::fs::read_to_string)?
        // Parse config file to Config struct
        .map(|str| toml::from_str::<Config>(&str))?
        .map_err(|e| e.into())
}
