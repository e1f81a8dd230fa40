//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::middleware::force_status_ok;
use crate::state::AppState;

/// API routes without the `/api` prefix (nested by [`create_router`]).
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/find-service", post(handlers::find_service::find_service))
}

/// Create the main router.
///
/// The forced-200 layer is applied last so it wraps every route, the
/// fallback and the trace layer.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .nest("/api", api_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(force_status_ok))
}
