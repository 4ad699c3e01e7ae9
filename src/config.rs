use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoreConfig {
    Sql {
        db_url: String,
        max_connections: u32,
        create_schema: bool,
    },
    Memory,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("PROFILE_HTTP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse(&lookup, "PROFILE_HTTP_PORT")?
            .ok_or(ConfigError::Missing("PROFILE_HTTP_PORT"))?;

        let store = match lookup("PROFILE_STORE").as_deref() {
            None | Some("sql") => StoreConfig::Sql {
                db_url: lookup("PROFILE_DB_URL").ok_or(ConfigError::Missing("PROFILE_DB_URL"))?,
                max_connections: parse(&lookup, "PROFILE_DB_MAX_CONNECTIONS")?
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
                create_schema: parse(&lookup, "PROFILE_DB_CREATE_SCHEMA")?.unwrap_or(false),
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "PROFILE_STORE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self { host, port, store })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&'static str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_sql_store_defaults() {
        let config = config(&[
            ("PROFILE_HTTP_PORT", "5000"),
            ("PROFILE_DB_URL", "sqlite://profiles.db?mode=rwc"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(
            config.store,
            StoreConfig::Sql {
                db_url: "sqlite://profiles.db?mode=rwc".to_string(),
                max_connections: 5,
                create_schema: false,
            }
        );
    }

    #[test]
    fn test_memory_store_needs_no_database() {
        let config = config(&[
            ("PROFILE_HTTP_HOST", "0.0.0.0"),
            ("PROFILE_HTTP_PORT", "8080"),
            ("PROFILE_STORE", "memory"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.store, StoreConfig::Memory);
    }

    #[test]
    fn test_missing_and_invalid_values() {
        assert!(matches!(
            config(&[("PROFILE_STORE", "memory")]),
            Err(ConfigError::Missing("PROFILE_HTTP_PORT"))
        ));
        assert!(matches!(
            config(&[("PROFILE_HTTP_PORT", "5000")]),
            Err(ConfigError::Missing("PROFILE_DB_URL"))
        ));
        assert!(matches!(
            config(&[("PROFILE_HTTP_PORT", "http")]),
            Err(ConfigError::Invalid { name: "PROFILE_HTTP_PORT", .. })
        ));
        assert!(matches!(
            config(&[("PROFILE_HTTP_PORT", "5000"), ("PROFILE_STORE", "redis")]),
            Err(ConfigError::Invalid { name: "PROFILE_STORE", .. })
        ));
        assert!(matches!(
            config(&[
                ("PROFILE_HTTP_PORT", "5000"),
                ("PROFILE_DB_URL", "sqlite::memory:"),
                ("PROFILE_DB_CREATE_SCHEMA", "yes"),
            ]),
            Err(ConfigError::Invalid { name: "PROFILE_DB_CREATE_SCHEMA", .. })
        ));
    }
}
