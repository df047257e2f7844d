//! Layered server configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. the YAML file passed with `--config`
//! 3. `AUTHORIZER__` prefixed environment variables, `__` separating levels
//!    (e.g. `AUTHORIZER__SERVER__BIND_ADDR=127.0.0.1:9000`)
//! 4. `ACCESS_TOKEN` for the shared secret

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use secrecy::SecretString;
use serde::Deserialize;
use token_authorizer::TokenAuthorizerConfig;
use token_authorizer::config::ACCESS_TOKEN_ENV;

const ENV_PREFIX: &str = "AUTHORIZER__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub authorizer: TokenAuthorizerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_owned(),
        }
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns an error if `bind_addr` is not a socket address.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind_addr '{}'", self.bind_addr))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration from all sources.
    ///
    /// # Errors
    /// Returns an error if a source cannot be read or the merged result does
    /// not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            anyhow::ensure!(path.is_file(), "config file '{}' not found", path.display());
        }
        let mut cfg: Self = figment(path)
            .extract()
            .context("failed to load configuration")?;
        apply_access_token(&mut cfg, std::env::var(ACCESS_TOKEN_ENV).ok());
        Ok(cfg)
    }
}

fn figment(path: Option<&Path>) -> Figment {
    let mut fig = Figment::new();
    if let Some(path) = path {
        fig = fig.merge(Yaml::file(path));
    }
    fig.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// `ACCESS_TOKEN` is read verbatim so numeric-looking secrets stay strings.
fn apply_access_token(cfg: &mut AppConfig, value: Option<String>) {
    if let Some(value) = value {
        cfg.authorizer.access_token = Some(SecretString::from(value));
    }
}
