//! Application settings loaded from environment variables.

use serde::Deserialize;

use crate::error::Result;

/// Immutable settings snapshot, read once at process start.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Application name. Fixed; never sourced from the environment.
    #[serde(skip_deserializing, default = "default_app_name")]
    pub app_name: String,

    /// Logging severity name (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Deployment environment label (dev, staging, prod).
    #[serde(default = "default_env")]
    pub env: String,

    /// Bind address for the HTTP listener.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listener port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_app_name() -> String {
    "fastapi-starter".to_string()
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_env() -> String {
    "dev".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Settings {
    /// Load settings from the environment, reading a .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Address string for the HTTP listener, e.g. `0.0.0.0:8000`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            log_level: default_log_level(),
            env: default_env(),
            host: default_host(),
            port: default_port(),
        }
    }
}
