use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::assets::handlers;
use crate::features::assets::services::AssetService;

/// Static files from the public directory.
///
/// Registers the router fallback, so merge it last and into a router that
/// has no fallback of its own.
pub fn routes(service: Arc<AssetService>) -> Router {
    Router::new()
        .route("/favicon.ico", get(handlers::favicon))
        .fallback(handlers::serve_asset)
        .with_state(service)
}
