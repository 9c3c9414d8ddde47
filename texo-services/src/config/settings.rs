//! Configuration settings for texo-services

use std::fmt;
use std::path::Path;

use config::{Config, Environment, File, Map};
use serde::Deserialize;
use texo_db::SqlConnection;
use thiserror::Error;

use super::defaults;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Main configuration struct for the service
#[derive(Clone, Deserialize)]
pub struct ServiceConfig {
    /// MySQL host name or IP address
    #[serde(default)]
    pub sql_address: String,

    #[serde(default)]
    pub sql_port: u16,

    #[serde(default)]
    pub sql_database: String,

    #[serde(default)]
    pub sql_username: String,

    #[serde(default)]
    pub sql_password: String,

    /// Posts per listing page
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: i64,

    /// Upper bound on pooled database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default = "default_server_address")]
    pub server_address: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    /// Log level (trace, debug, info, warn, error)
    /// Can be overridden by RUST_LOG env var
    #[serde(default)]
    pub log_level: Option<String>,
}

// Default value functions for serde
fn default_posts_per_page() -> i64 {
    defaults::POSTS_PER_PAGE
}
fn default_max_connections() -> usize {
    defaults::MAX_CONNECTIONS
}
fn default_server_address() -> String {
    defaults::SERVER_ADDRESS.to_string()
}
fn default_server_port() -> u16 {
    defaults::SERVER_PORT
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            sql_address: String::new(),
            sql_port: 0,
            sql_database: String::new(),
            sql_username: String::new(),
            sql_password: String::new(),
            posts_per_page: default_posts_per_page(),
            max_connections: default_max_connections(),
            server_address: default_server_address(),
            server_port: default_server_port(),
            log_level: None,
        }
    }
}

// Keep the database password out of logs.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("sql_address", &self.sql_address)
            .field("sql_port", &self.sql_port)
            .field("sql_database", &self.sql_database)
            .field("sql_username", &self.sql_username)
            .field("sql_password", &"***")
            .field("posts_per_page", &self.posts_per_page)
            .field("max_connections", &self.max_connections)
            .field("server_address", &self.server_address)
            .field("server_port", &self.server_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl ServiceConfig {
    /// Load configuration using config-rs (file + TEXO_* environment variables)
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(config_path, None)
    }

    /// Like [`load`](Self::load), reading environment overrides from `env`
    /// instead of the process environment when given.
    pub fn from_sources(
        config_path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        } else {
            builder = builder.add_source(File::with_name(defaults::CONFIG_FILE_NAME).required(false));
        }

        // TEXO_SQL_ADDRESS -> sql_address
        builder = builder.add_source(
            Environment::with_prefix(defaults::ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("sql_address", &self.sql_address),
            ("sql_database", &self.sql_database),
            ("sql_username", &self.sql_username),
            ("sql_password", &self.sql_password),
        ];
        for (key, value) in required {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{} is required", key)));
            }
        }

        if self.sql_port == 0 {
            return Err(ConfigError::Validation("sql_port is required".into()));
        }

        if self.posts_per_page < 1 {
            return Err(ConfigError::Validation(format!(
                "posts_per_page must be at least 1, got {}",
                self.posts_per_page
            )));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Database connection parameters.
    pub fn connection(&self) -> SqlConnection {
        SqlConnection {
            address: self.sql_address.clone(),
            port: self.sql_port,
            database: self.sql_database.clone(),
            username: self.sql_username.clone(),
            password: self.sql_password.clone(),
        }
    }

    /// `address:port` for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_address, self.server_port)
    }
}
