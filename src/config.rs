//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `HOST`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };
        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost { value: raw.clone() })?,
            None => DEFAULT_HOST,
        };
        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort { value: raw.to_owned() }),
    }
}
