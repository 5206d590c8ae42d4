//! Startup error types.

use std::net::SocketAddr;

/// Invalid server configuration in the environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid HOST {value:?}: expected an IP address")]
    InvalidHost { value: String },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
