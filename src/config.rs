use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MOUNT: &str = "/api";
pub const DEFAULT_FPL_API_URL: &str = "https://fantasy.premierleague.com/api";
const DEFAULT_FPL_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in .env")]
    Missing(&'static str),
    #[error("{name} is not in the correct format: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the server, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// Normalized mount path: empty for the root, otherwise `/segment` with no trailing slash.
    pub mount: String,
    pub fpl_api_url: String,
    pub fpl_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = required(&lookup, "HOST")?;
        let host = host
            .parse()
            .map_err(|_| ConfigError::Invalid { name: "HOST", value: host })?;

        let port = required(&lookup, "PORT")?;
        let port = port
            .parse()
            .map_err(|_| ConfigError::Invalid { name: "PORT", value: port })?;

        let mount = normalize_mount(&lookup("API_MOUNT").unwrap_or_else(|| DEFAULT_MOUNT.to_string()));

        let fpl_api_url = lookup("FPL_API_URL")
            .unwrap_or_else(|| DEFAULT_FPL_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let fpl_timeout = match lookup("FPL_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "FPL_TIMEOUT_SECS", value })?,
            None => DEFAULT_FPL_TIMEOUT_SECS,
        };

        Ok(Config {
            host,
            port,
            mount,
            fpl_api_url,
            fpl_timeout: Duration::from_secs(fpl_timeout),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::Missing(name))
}

/// `api/`, `/api/` and `/api` all become `/api`; `/` and `` become the root (empty).
pub fn normalize_mount(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_missing() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.mount, "/api");
        assert_eq!(config.fpl_api_url, DEFAULT_FPL_API_URL);
        assert_eq!(config.fpl_timeout, Duration::from_secs(10));
    }

    #[test]
    fn missing_port_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "0.0.0.0")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PORT"));
    }

    #[test]
    fn malformed_host_is_reported() {
        let err = Config::from_lookup(lookup_from(&[("HOST", "localhost"), ("PORT", "80")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid { name: "HOST", value: "localhost".to_string() }
        );
    }

    #[test]
    fn upstream_url_loses_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("FPL_API_URL", "http://localhost:9000/api/"),
            ("API_MOUNT", "/v1/"),
        ]))
        .unwrap();

        assert_eq!(config.fpl_api_url, "http://localhost:9000/api");
        assert_eq!(config.mount, "/v1");
    }

    #[test]
    fn mount_normalization() {
        assert_eq!(normalize_mount("api"), "/api");
        assert_eq!(normalize_mount("/api/"), "/api");
        assert_eq!(normalize_mount("/"), "");
        assert_eq!(normalize_mount(""), "");
    }
}
