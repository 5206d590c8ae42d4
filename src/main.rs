mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::*;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "portfolio server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "portfolio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
