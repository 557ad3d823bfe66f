use config::{Config, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use crate::error::Result;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MOODTUNE_` prefix, for example `MOODTUNE_SERVER__PORT=8080`. The bare
/// `PORT` variable is also honored for the listening port.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_cors")]
    pub cors: bool,

    /// Directory served for paths outside `/api` (front-end assets)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
            static_dir: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors() -> bool {
    true
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Nested values use double underscores:
    /// - `MOODTUNE_SERVER__HOST` -> server.host
    /// - `MOODTUNE_SERVER__PORT` -> server.port
    /// - `MOODTUNE_SERVER__CORS` -> server.cors
    /// - `MOODTUNE_SERVER__STATIC_DIR` -> server.static_dir
    ///
    /// `PORT` overrides `server.port` when set. Unreadable values are
    /// reported as [`AppError::Config`](crate::error::AppError::Config).
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOODTUNE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors);
        assert!(config.server.static_dir.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_socket_addr() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 8080, "static_dir": "public"}}"#).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_load_reports_unreadable_port() {
        // PORT is applied as an override, so it wins over anything else set
        let previous = std::env::var("PORT").ok();
        std::env::set_var("PORT", "not-a-port");
        let result = AppConfig::load();
        match previous {
            Some(port) => std::env::set_var("PORT", port),
            None => std::env::remove_var("PORT"),
        }

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
