//! # svcfind-axum
//!
//! HTTP facade for svcfind: `GET /api/health` and `POST /api/find-service`.
//!
//! Every response carries status 200. Failures are reported in the JSON body
//! as `{"success": false, "error": "..."}`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for integration-test-only crates
#[cfg(test)]
use async_trait as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, DEFAULT_MODEL, DEFAULT_PORT, ServerConfig, bootstrap, serve, start_server,
};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
