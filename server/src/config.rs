//! Host configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only renders and serves the web client; the marketplace API is a
//! separate backend. Listen address comes from `HOST`/`PORT`, and the
//! browser-facing settings (`API_URL`, `STRIPE_PUBLIC_KEY`, `APP_ENV`) are
//! forwarded to the client through the SSR shell.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use client::config::ClientConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {key}: {value:?}")]
    InvalidVar { key: &'static str, value: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    pub client: ClientConfig,
}

impl HostConfig {
    /// Read the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidVar`] when `HOST` or `PORT` is set but
    /// malformed.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: env_parse("HOST", lookup("HOST"), DEFAULT_HOST)?,
            port: env_parse("PORT", lookup("PORT"), DEFAULT_PORT)?,
            client: ClientConfig::from_lookup(&lookup),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_parse<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, HostError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| HostError::InvalidVar { key, value: value.to_owned() }),
    }
}
