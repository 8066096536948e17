//! Runtime configuration from the process environment.

use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: 5,
            body_limit_bytes: 1024 * 1024,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `BODY_LIMIT_BYTES`
    /// and `CORS_ORIGINS`; unset keys keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Config {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.database_url),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = from_pairs(&[]).unwrap();
        assert_eq!(c.bind_address().to_string(), "0.0.0.0:3000");
        assert_eq!(c.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(c.max_connections, 5);
        assert!(c.cors_origins.is_empty());
    }

    #[test]
    fn overrides_are_parsed() {
        let c = from_pairs(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://localhost:5500, http://example.com,"),
        ])
        .unwrap();
        assert_eq!(c.bind_address().to_string(), "127.0.0.1:8080");
        assert_eq!(c.database_url, "sqlite::memory:");
        assert_eq!(
            c.cors_origins,
            vec!["http://localhost:5500".to_string(), "http://example.com".to_string()]
        );
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
