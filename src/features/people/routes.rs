use axum::{http::header, routing::get, Router};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::features::people::handlers;
use crate::features::people::services::PeopleService;

/// Create routes for the people API
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<PeopleService>) -> Router {
    Router::new()
        .route(
            "/api/pessoas",
            get(handlers::list_people).fallback(handlers::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json; charset=UTF-8"),
        ))
        .with_state(service)
}
