//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::constants::{DEFAULT_LOCALE, DEFAULT_MENUS_PATH, DEFAULT_SOURCE_TIMEOUT_SECONDS, DEFAULT_SUPPORTED_LOCALES};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub menu_source: MenuSourceSettings,
    pub navigation: NavigationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Upstream CMS endpoint that serves raw menu envelopes.
#[derive(Debug, Deserialize, Clone)]
pub struct MenuSourceSettings {
    pub base_url: String,
    pub menus_path: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    pub default_locale: String,
    pub supported_locales: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        debug!("Loading configuration for environment: {}", env);

        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(environment())
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Builder pre-populated with every default, without any file or env source.
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let supported: Vec<String> = DEFAULT_SUPPORTED_LOCALES.iter().map(|s| s.to_string()).collect();

        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "portal-server")?
            .set_default("menu_source.base_url", "http://127.0.0.1:3000/api")?
            .set_default("menu_source.menus_path", DEFAULT_MENUS_PATH)?
            .set_default("menu_source.timeout_seconds", DEFAULT_SOURCE_TIMEOUT_SECONDS)?
            .set_default("navigation.default_locale", DEFAULT_LOCALE)?
            .set_default("navigation.supported_locales", supported)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.menu_source.base_url.trim().is_empty() {
            return Err(AppError::InvalidConfig("menu_source.base_url must not be empty".into()));
        }
        if self.menu_source.timeout_seconds == 0 {
            return Err(AppError::InvalidConfig("menu_source.timeout_seconds must be positive".into()));
        }
        if !self
            .navigation
            .supported_locales
            .iter()
            .any(|l| l == &self.navigation.default_locale)
        {
            return Err(AppError::InvalidConfig(format!(
                "navigation.default_locale '{}' is not in supported_locales",
                self.navigation.default_locale
            )));
        }
        Ok(())
    }
}

/// `NAVIGATION__SUPPORTED_LOCALES=en,ne` style overrides.
fn environment() -> Environment {
    Environment::default()
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("navigation.supported_locales")
        .try_parsing(true)
}
