// Runtime configuration read from the process environment.
//
// Variables
// - HOST (default 0.0.0.0), PORT (default 8080)
// - RUST_LOG (default info)
// - CORS_ALLOWED_ORIGIN (optional, single origin)
//
// An optional .env file is loaded first. A missing file is fine, a malformed one is not.

use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),

    #[error("invalid PORT {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),

    #[error("invalid CORS_ALLOWED_ORIGIN {0:?}")]
    InvalidCorsOrigin(String),

    #[error("failed to load env file: {0}")]
    EnvFile(String),
}

/// Loads variables from `path` into the process environment.
/// Returns whether the file existed.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path.as_ref()) {
        Ok(()) => Ok(true),
        Err(error) if error.not_found() => Ok(false),
        Err(error) => Err(ConfigError::EnvFile(error.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let cors_allowed_origin = match lookup("CORS_ALLOWED_ORIGIN") {
            Some(raw) if !raw.trim().is_empty() => Some(
                HeaderValue::from_str(raw.trim())
                    .map_err(|_| ConfigError::InvalidCorsOrigin(raw))?,
            ),
            _ => None,
        };

        Ok(Self {
            host,
            port,
            log_filter,
            cors_allowed_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_filter, "info");
        assert!(config.cors_allowed_origin.is_none());
    }

    #[rstest]
    fn it_should_read_every_variable() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("RUST_LOG", "email_signups=debug"),
            ("CORS_ALLOWED_ORIGIN", "https://gamingcenter.in"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.log_filter, "email_signups=debug");
        assert_eq!(
            config.cors_allowed_origin,
            Some(HeaderValue::from_static("https://gamingcenter.in"))
        );
    }

    #[rstest]
    #[case(&[("PORT", "eighty")], ConfigError::InvalidPort("eighty".into()))]
    #[case(&[("PORT", "70000")], ConfigError::InvalidPort("70000".into()))]
    #[case(&[("HOST", "localhost")], ConfigError::InvalidHost("localhost".into()))]
    #[case(&[("CORS_ALLOWED_ORIGIN", "a\nb")], ConfigError::InvalidCorsOrigin("a\nb".into()))]
    fn it_should_reject_malformed_values(
        #[case] pairs: &[(&str, &str)],
        #[case] expected: ConfigError,
    ) {
        assert_eq!(AppConfig::from_lookup(lookup_from(pairs)).unwrap_err(), expected);
    }

    #[rstest]
    fn it_should_skip_a_missing_env_file() {
        let path = std::env::temp_dir().join(format!("email-signups-{}.env", Uuid::now_v7()));
        assert_eq!(load_env_file(&path), Ok(false));
    }

    #[rstest]
    fn it_should_reject_a_malformed_env_file() {
        let path = std::env::temp_dir().join(format!("email-signups-{}.env", Uuid::now_v7()));
        std::fs::write(&path, "not a valid line\n").unwrap();
        let result = load_env_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::EnvFile(_))));
    }
}
