//! HTTP request handlers.
//!
//! Handlers are thin wrappers that delegate to the core `ServiceFinder`.

pub mod find_service;
pub mod health;
