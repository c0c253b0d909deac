//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `CLIENTES_*` environment variables, command-line flags or
//! a configuration file, with the defaults below when absent.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

use crate::domain::Locale;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Host and port do not resolve to a socket address.
    #[error("invalid bind address {address}: {message}")]
    InvalidBindAddress { address: String, message: String },
}

/// Configuration values for the HTTP server and its storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CLIENTES")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Default message locale, e.g. `pt-BR`.
    pub locale: Option<String>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve host and port to the address the server binds.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.host(), self.port());
        let invalid = |message: String| SettingsError::InvalidBindAddress {
            address: address.clone(),
            message,
        };
        (self.host(), self.port())
            .to_socket_addrs()
            .map_err(|err| invalid(err.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses resolved".to_owned()))
    }

    /// Whether embedded migrations run at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Pool configuration when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url()
            .map(|url| PoolConfig::new(url).with_max_size(self.db_max_connections()))
    }

    /// Default message locale: the configured one, else the host locale.
    ///
    /// `None` leaves the choice to the message catalogue's fallback.
    pub fn default_locale(&self) -> Option<Locale> {
        self.configured_locale().or_else(Locale::from_host)
    }

    fn configured_locale(&self) -> Option<Locale> {
        let raw = self.locale.as_deref()?;
        let parsed = Locale::parse(raw);
        if parsed.is_none() {
            warn!(locale = raw, "ignoring unparseable configured locale");
        }
        parsed
    }
}
