//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe, the compiled `/pkg` assets, and Leptos SSR for the
//! portfolio page under a single Axum router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz)).fallback(not_found)
}

/// Full application: SSR page at `/`, static assets at `/pkg`, health probe.
pub fn app(options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options);

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
