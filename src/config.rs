//! Host configuration from the environment.
//!
//! `.env` is loaded first (missing file is fine), then `BLOGWEB_ADDR` and
//! `PORT` are read with defaults `0.0.0.0` and `3000`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    Port(String),
    #[error("invalid BLOGWEB_ADDR {0:?}")]
    Addr(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: IpAddr,
    pub port: u16,
}

impl Config {
    /// # Errors
    ///
    /// Returns an error if `PORT` or `BLOGWEB_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, ".env not loaded");
            }
        }
        Self::from_values(
            std::env::var("BLOGWEB_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// # Errors
    ///
    /// Returns an error if a present value does not parse.
    pub fn from_values(addr: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let addr = match addr.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Addr(raw.to_owned()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Port(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}
