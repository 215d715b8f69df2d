//! Application configuration from file and environment variables
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (prefixed with BACKBEAT_)
//! 2. Config file (config.toml)
//! 3. Default values
//!
//! Secrets like the database password belong in environment variables, not
//! in the config file.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Global application configuration
pub static APP_CONFIG: Lazy<RwLock<AppConfig>> = Lazy::new(|| {
    RwLock::new(AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    }))
});

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Backbeat".to_string(),
            description: "A music weblog".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Media configuration
///
/// `image`, `mp3`, and entry image columns store paths relative to
/// `upload_dir`; the bytes themselves are owned by external file storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Directory uploads are stored under
    pub upload_dir: String,
    /// Public URL prefix media paths are served from
    pub base_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_dir: "media".to_string(),
            base_url: "/media".to_string(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &str) -> Result<Self, ConfigError> {
        use config::FileFormat;

        let config = Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(File::new(path, FileFormat::Toml).required(false))
            // e.g. BACKBEAT_SITE_NAME, BACKBEAT_MEDIA_UPLOAD_DIR
            .add_source(
                Environment::with_prefix("BACKBEAT")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reload configuration from file
    pub fn reload() -> Result<(), ConfigError> {
        let new_config = Self::load()?;
        if let Ok(mut config) = APP_CONFIG.write() {
            *config = new_config;
            log::info!("Configuration reloaded");
        }
        Ok(())
    }
}

/// Trigger the lazy load and log the result. Call early in startup.
pub fn init() {
    let config = APP_CONFIG.read().unwrap();
    log::info!("Configuration loaded: site.name = {}", config.site.name);
}

/// Get the current application configuration
pub fn get_config() -> AppConfig {
    APP_CONFIG.read().map(|c| c.clone()).unwrap_or_default()
}

/// Get site configuration
pub fn site() -> SiteConfig {
    get_config().site
}

/// Get media configuration
pub fn media() -> MediaConfig {
    get_config().media
}
