use std::path::PathBuf;

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per collection under `data_dir`.
    File,
    /// Process-local key-value map; nothing survives a restart.
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub seed_defaults: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password_hash: Option<String>,
    /// Plaintext fallback, hashed at startup. Prefer `admin_password_hash`.
    pub admin_password: Option<String>,
    pub session_secret: String,
    pub session_duration_hours: i64,
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("storage.backend", "file")?
            .set_default("storage.data_dir", "data")?
            .set_default("storage.seed_defaults", true)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.session_secret", "change-me-in-production")?
            .set_default("auth.session_duration_hours", 24)?
            .set_default("auth.secure_cookies", false)?

            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Add environment variables (with NOWZER prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("NOWZER").separator("__"))

            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: PathBuf::from("data"),
                seed_defaults: true,
            },
            auth: AuthConfig {
                admin_username: "admin".to_string(),
                admin_password_hash: None,
                admin_password: None,
                session_secret: "change-me-in-production".to_string(),
                session_duration_hours: 24,
                secure_cookies: false,
            },
        }
    }
}
