//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Deep link composition constants
    pub link: LinkSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Deep link composition constants.
///
/// These are read once at startup and treated as immutable for the process
/// lifetime. They are assumed pre-sanitized: the domain and store URL are
/// inserted into links without further encoding.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSettings {
    /// Base domain all deep links are rooted at (no trailing slash)
    pub domain: String,

    /// Store listing URL used as the `afl` install fallback
    pub play_store_url: String,

    /// Android application id used as the `apn` fallback parameter
    pub package_name: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("link.domain", "https://snapora.com")?
            .set_default(
                "link.play_store_url",
                "https://play.google.com/store/apps/details?id=com.snapora.app",
            )?
            .set_default("link.package_name", "com.snapora.app")?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option(
                "server.host",
                std::env::var("SERVER_HOST").ok(),
            )?
            .set_override_option(
                "server.port",
                std::env::var("PORT").ok(),
            )?
            .set_override_option(
                "link.domain",
                std::env::var("APP_LINK_DOMAIN").ok(),
            )?
            .set_override_option(
                "link.play_store_url",
                std::env::var("PLAY_STORE_URL").ok(),
            )?
            .set_override_option(
                "link.package_name",
                std::env::var("APP_PACKAGE_NAME").ok(),
            )?
            .build()?
            .try_deserialize()
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
