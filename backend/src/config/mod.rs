//! Central module for application-wide configuration settings.
//!
//! Settings are read once from the environment at startup. A missing variable
//! falls back to its default; a present but malformed one stops the server.

use std::{
    env,
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
    time::Duration,
};

use thiserror::Error;
use tracing::{info, warn};

pub const HOST_VAR: &str = "ALMANAC_HOST";
pub const PORT_VAR: &str = "ALMANAC_PORT";
pub const CATALOGS_VAR: &str = "ALMANAC_CATALOGS";
pub const CORS_MAX_AGE_VAR: &str = "ALMANAC_CORS_MAX_AGE_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// One of the two content catalogs the server can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Art,
    Islamic,
}

impl FromStr for Catalog {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "art" => Ok(Catalog::Art),
            "islamic" => Ok(Catalog::Islamic),
            other => Err(format!("unknown catalog `{other}`")),
        }
    }
}

/// Comma-separated, de-duplicated, non-empty list of catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogList(pub Vec<Catalog>);

impl FromStr for CatalogList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut catalogs = Vec::new();
        for part in s.split(',').filter(|part| !part.trim().is_empty()) {
            let catalog = part.parse()?;
            if !catalogs.contains(&catalog) {
                catalogs.push(catalog);
            }
        }

        if catalogs.is_empty() {
            return Err("at least one catalog must be enabled".to_string());
        }
        Ok(Self(catalogs))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub catalogs: Vec<Catalog>,
    pub cors_max_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            catalogs: vec![Catalog::Art, Catalog::Islamic],
            cors_max_age: Duration::from_secs(60 * 60),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so tests do not
    /// have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let CatalogList(catalogs) = try_load(&lookup, CATALOGS_VAR, "art,islamic")?;

        Ok(Self {
            host: try_load(&lookup, HOST_VAR, "127.0.0.1")?,
            port: try_load(&lookup, PORT_VAR, "3000")?,
            catalogs,
            cors_max_age: Duration::from_secs(try_load(&lookup, CORS_MAX_AGE_VAR, "3600")?),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "8080"),
            (CATALOGS_VAR, " islamic , islamic"),
            (CORS_MAX_AGE_VAR, "60"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.catalogs, vec![Catalog::Islamic]);
        assert_eq!(config.cors_max_age, Duration::from_secs(60));
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: PORT_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(CATALOGS_VAR, "music")])).unwrap_err();
        assert!(err.to_string().contains("unknown catalog `music`"));

        assert!(Config::from_lookup(lookup(&[(CATALOGS_VAR, " , ")])).is_err());
    }
}
