//! Command line and environment configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};

use crate::{Error, IdentityService, RemoteDatabase};

/// Where the category and expense stores keep their records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    /// Keep records in memory. Records are lost when the server stops.
    Memory,
    /// Keep records in a hosted database with a PostgREST-style API.
    Remote,
}

/// The REST API server for the expense tracker.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The address to listen on.
    #[arg(long, env = "BIND_ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = 8001)]
    pub port: u16,

    /// Where to keep categories and expenses.
    #[arg(long, env = "EXPENSE_STORE", value_enum, default_value_t = StoreBackend::Memory)]
    pub store: StoreBackend,

    /// Base URL of the hosted database, e.g. `https://project.example.co`.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Access key for the hosted database.
    #[arg(long, env = "DATABASE_KEY", hide_env_values = true)]
    pub database_key: Option<String>,

    /// Base URL of the identity service. Leave unset to serve the API without
    /// checking bearer tokens.
    #[arg(long, env = "AUTH_URL")]
    pub auth_url: Option<String>,

    /// Access key for the identity service. Defaults to the database key.
    #[arg(long, env = "AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    /// Directory with `index.html` and the other front end files.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// File that debug logs are appended to.
    #[arg(long, env = "LOG_PATH", default_value = "debug.log")]
    pub log_path: PathBuf,
}

impl Config {
    /// The socket address the server should bind to.
    pub fn socket_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the client for the hosted database.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if the database URL or key is missing,
    /// or if the URL is malformed.
    pub fn remote_database(&self) -> Result<RemoteDatabase, Error> {
        let url = require(&self.database_url, "--database-url")?;
        let key = require(&self.database_key, "--database-key")?;

        RemoteDatabase::new(url, key)
    }

    /// Build the identity service client, or `None` if no identity service
    /// has been configured.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if an identity service URL is set
    /// without a key, or if the URL is malformed.
    pub fn identity_service(&self) -> Result<Option<IdentityService>, Error> {
        let Some(url) = &self.auth_url else {
            return Ok(None);
        };

        let key = self
            .auth_key
            .as_deref()
            .or(self.database_key.as_deref())
            .ok_or_else(|| {
                Error::InvalidConfig(
                    "--auth-url requires --auth-key or --database-key to be set".to_owned(),
                )
            })?;

        IdentityService::new(url, key).map(Some)
    }
}

fn require<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a str, Error> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| Error::InvalidConfig(format!("{flag} must be set for the remote store")))
}

/// Check that `raw` is an absolute HTTP(S) URL and return it without a
/// trailing slash.
pub(crate) fn parse_base_url(raw: &str) -> Result<String, Error> {
    let url = reqwest::Url::parse(raw)
        .map_err(|error| Error::InvalidConfig(format!("invalid URL \"{raw}\": {error}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url.as_str().trim_end_matches('/').to_owned()),
        scheme => Err(Error::InvalidConfig(format!(
            "invalid URL \"{raw}\": expected http or https, got {scheme}"
        ))),
    }
}
