use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, applied in order.
pub const CONFIG_PATH_ENV: &str = "CONTACTDESK_CONFIG";

/// Prefix of environment variables overriding single values, e.g.
/// `CONTACTDESK__HTTP__PORT=8080`.
pub const ENV_PREFIX: &str = "CONTACTDESK";

/// Loads the config files listed in `CONTACTDESK_CONFIG` (or the default
/// config file) and applies overrides from the environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = config_paths();
    build(&paths, environment())
}

/// Loads the given config files without looking at the environment.
pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    build(paths, Environment::default().source(Some(Default::default())))
}

pub fn config_paths() -> Vec<PathBuf> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(paths) if !paths.is_empty() => std::env::split_paths(&paths).collect(),
        _ => vec![DEFAULT_CONFIG_PATH.into()],
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

fn build(paths: &[impl AsRef<Path>], environment: Environment) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(builder.add_source(File::from_str(&content, FileFormat::Toml)))
        })?
        .add_source(environment)
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpConfig {
    pub fn addr(&self) -> SocketAddr {
        (self.host, self.port).into()
    }
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_paths(&[DEFAULT_CONFIG_PATH]).unwrap();
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.idle_timeout, None);
        assert_eq!(*config.health.cache_ttl, std::time::Duration::from_secs(2));
    }

    #[test]
    fn environment_overrides() {
        // Arrange
        let env = HashMap::from([
            ("CONTACTDESK__HTTP__PORT".to_owned(), "8080".to_owned()),
            ("CONTACTDESK__DATABASE__IDLE_TIMEOUT".to_owned(), "10m".to_owned()),
        ]);

        // Act
        let config = build(&[DEFAULT_CONFIG_PATH], environment().source(Some(env))).unwrap();

        // Assert
        assert_eq!(config.http.addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.database.idle_timeout.map(|x| x.0),
            Some(std::time::Duration::from_secs(600))
        );
    }

    #[test]
    fn missing_file() {
        let err = load_paths(&["/does/not/exist.toml"]).unwrap_err();
        assert!(err.to_string().contains("/does/not/exist.toml"));
    }
}
