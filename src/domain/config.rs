//! Server layout and connection configuration (`ferry.toml`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::AppError;

/// Base paths on the server, the local machine, and the link area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Root under which managed objects live on the server.
    pub base_server_path: String,
    /// Root for local files offered for upload.
    pub base_local_path: String,
    /// Server directory where links are created.
    pub link_base_path: String,
}

impl ServerConfig {
    /// Create a validated layout.
    pub fn new(
        base_server_path: impl Into<String>,
        base_local_path: impl Into<String>,
        link_base_path: impl Into<String>,
    ) -> Result<Self, AppError> {
        let config = Self {
            base_server_path: base_server_path.into(),
            base_local_path: base_local_path.into(),
            link_base_path: link_base_path.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject empty base paths.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.base_server_path.is_empty() {
            return Err(AppError::config_error("base_server_path must not be empty"));
        }
        if self.base_local_path.is_empty() {
            return Err(AppError::config_error("base_local_path must not be empty"));
        }
        if self.link_base_path.is_empty() {
            return Err(AppError::config_error("link_base_path must not be empty"));
        }
        Ok(())
    }
}

/// Parameters for opening the SSH session.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectParams {
    pub host: String,
    pub username: String,
    pub password: String,
    /// SSH port, 22 unless overridden.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    22
}

impl ConnectParams {
    /// Reject parameters the session cannot be opened with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.host.is_empty() {
            return Err(AppError::config_error("host must not be empty"));
        }
        if self.username.is_empty() {
            return Err(AppError::config_error("username must not be empty"));
        }
        Ok(())
    }
}

/// Root of the `ferry.toml` configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub connection: ConnectParams,
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<Config, AppError> {
    let config: Config = toml::from_str(content)?;
    config.server.validate()?;
    config.connection.validate()?;
    Ok(config)
}

/// Load and validate a configuration file before any remote call is made.
pub fn load_config_file(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
