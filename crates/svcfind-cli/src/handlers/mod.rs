//! Command handlers.

pub mod key_status;
pub mod render;
pub mod serve;
pub mod services;
