// src/config.rs
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_PATH: &str = "/api/chat";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Mount point of the chat route. `/` mounts it at the root.
    pub base_path: String,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    /// Expose fault details in 500 responses.
    pub verbose_errors: bool,
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            base_path: DEFAULT_BASE_PATH.to_string(),
            cors_origin: None,
            verbose_errors: false,
            static_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.trim().parse().map_err(|_| ConfigError::Invalid {
            var: "HOST",
            value: host.clone(),
        })?;

        let port = match var("PORT") {
            Some(p) => p.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: p.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let base_path = var("CHAT_BASE_PATH").unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let base_path = normalize_base_path(&base_path).ok_or(ConfigError::Invalid {
            var: "CHAT_BASE_PATH",
            value: base_path.clone(),
        })?;

        let cors_origin = match var("CORS_ALLOWED_ORIGIN") {
            Some(origin) if origin.trim() == "*" => None,
            Some(origin) => Some(HeaderValue::from_str(origin.trim()).map_err(|_| {
                ConfigError::Invalid {
                    var: "CORS_ALLOWED_ORIGIN",
                    value: origin.clone(),
                }
            })?),
            None => None,
        };

        let verbose_errors = var("APP_ENV")
            .map(|env| env.trim().eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        Ok(Self {
            addr: SocketAddr::new(host, port),
            base_path,
            cors_origin,
            verbose_errors,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
        })
    }
}

// Must be absolute; trailing slashes are dropped so "/api/chat/" == "/api/chat".
fn normalize_base_path(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if !raw.starts_with('/') || raw.contains(['{', '}', '*']) {
        return None;
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        Some("/".to_string())
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.base_path, "/api/chat");
        assert!(config.cors_origin.is_none());
        assert!(!config.verbose_errors);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CHAT_BASE_PATH", "/chat/"),
            ("CORS_ALLOWED_ORIGIN", "https://example.org"),
            ("APP_ENV", "Development"),
            ("STATIC_DIR", "public"),
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.base_path, "/chat");
        assert_eq!(config.cors_origin.unwrap(), "https://example.org");
        assert!(config.verbose_errors);
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn wildcard_origin_allows_all() {
        let config = load(&[("CORS_ALLOWED_ORIGIN", "*")]).unwrap();
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn root_base_path() {
        let config = load(&[("CHAT_BASE_PATH", "/")]).unwrap();
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("PORT", "seventy")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("HOST", "not-an-ip")]).is_err());
        assert!(load(&[("CHAT_BASE_PATH", "api/chat")]).is_err());
        assert!(load(&[("CHAT_BASE_PATH", "/chat/{id}")]).is_err());
    }

    #[test]
    fn production_is_not_verbose() {
        let config = load(&[("APP_ENV", "production")]).unwrap();
        assert!(!config.verbose_errors);
    }
}
