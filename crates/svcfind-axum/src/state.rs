//! Shared application state type.

use std::sync::Arc;

use crate::bootstrap::AxumContext;

/// Application state shared across all handlers.
///
/// Built once at startup and only read afterwards.
pub type AppState = Arc<AxumContext>;
