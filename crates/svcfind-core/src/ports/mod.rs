//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` or `axum` types in any signature
//! - Errors are domain-level; adapters map their own errors at the boundary

pub mod classifier;
pub mod prompt_renderer;

pub use classifier::{ClassifierError, ClassifierPort, ClassifierResult};
pub use prompt_renderer::PromptRendererPort;
