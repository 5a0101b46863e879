//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static HTML; the server only adds a health probe and mounts two
//! directories: the generated pages at `/` and the WASM bundle at `/pkg`.
//! Unknown paths get the site's own `404.html` with a 404 status.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Full preview router for `config`.
pub fn app(config: &ServerConfig) -> Router {
    let not_found = ServeFile::new(config.site_dir.join("404.html"));
    let pages = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .not_found_service(not_found);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .fallback_service(pages)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
