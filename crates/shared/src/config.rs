//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Budget editing session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Budget editing session configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SessionConfig {
    /// Number of year rows a fresh session starts with, and resets to after a save.
    #[serde(default = "default_initial_year_count")]
    pub initial_year_count: usize,
    /// Upper bound on the number of years a session may plan.
    #[serde(default = "default_max_year_count")]
    pub max_year_count: usize,
    /// Seconds a session may go untouched before it is dropped from memory.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    /// Most sessions held in memory at once; opening more is refused.
    #[serde(default = "default_max_open_sessions")]
    pub max_open_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_year_count: default_initial_year_count(),
            max_year_count: default_max_year_count(),
            idle_timeout_secs: default_idle_timeout_secs(),
            max_open_sessions: default_max_open_sessions(),
        }
    }
}

fn default_initial_year_count() -> usize {
    1
}

fn default_max_year_count() -> usize {
    50
}

fn default_idle_timeout_secs() -> u64 {
    1800
}

fn default_max_open_sessions() -> u64 {
    10_000
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MBUDGET").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
