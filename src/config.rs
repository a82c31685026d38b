//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `BIND_ADDR`: HTTP listen address (default: `127.0.0.1:8080`)
//! - `DATABASE_URL`: `SQLite` database path (default: `messages.db`)
//! - `DATABASE_POOL_SIZE`: maximum pooled connections (default: 8)
//! - `WORKER_POOL_SIZE`: concurrent blocking tasks (default: 16)
//! - `STREAM_PAGE_SIZE`: rows fetched per cursor page (default: 64)
//! - `RUST_LOG`: log filter directive (default: `info`)
//!
//! [`load_dotenv`] copies a `.env` file from the working directory into the
//! process environment. A missing file is not an error.

use std::net::SocketAddr;
use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;

use thiserror::Error;

use crate::message::adapters::sqlite::DEFAULT_PAGE_SIZE;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(std::net::SocketAddrV4::new(std::net::Ipv4Addr::LOCALHOST, 8080));
const DEFAULT_DATABASE_URL: &str = "messages.db";
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value as found in the environment.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// `SQLite` database path or URL.
    pub database_url: String,
    /// Maximum number of pooled database connections.
    pub database_pool_size: NonZeroU32,
    /// Maximum number of blocking tasks running at once.
    pub worker_pool_size: NonZeroUsize,
    /// Rows fetched per round trip by streaming reads.
    pub stream_page_size: NonZeroU32,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            database_pool_size: NonZeroU32::MIN.saturating_add(7),
            worker_pool_size: NonZeroUsize::MIN.saturating_add(15),
            stream_page_size: DEFAULT_PAGE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// Call [`load_dotenv`] first for `.env` values to be seen.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through `lookup`, falling back to defaults for unset
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            bind_addr: parsed(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_pool_size: parsed(&lookup, "DATABASE_POOL_SIZE")?
                .unwrap_or(defaults.database_pool_size),
            worker_pool_size: parsed(&lookup, "WORKER_POOL_SIZE")?
                .unwrap_or(defaults.worker_pool_size),
            stream_page_size: parsed(&lookup, "STREAM_PAGE_SIZE")?
                .unwrap_or(defaults.stream_page_size),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

/// Loads `.env` from the working directory into the process environment.
///
/// Returns the failure to report, or `None` when the file was loaded or does
/// not exist.
#[must_use]
pub fn load_dotenv() -> Option<dotenvy::Error> {
    reportable(dotenvy::dotenv())
}

fn reportable<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    result.err().filter(|err| !err.not_found())
}

fn parsed<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    let result = value.trim().parse::<T>();
    match result {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => Err(ConfigError::Invalid {
            key,
            reason: err.to_string(),
            value,
        }),
    }
}
