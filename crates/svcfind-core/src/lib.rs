//! # svcfind-core
//!
//! Domain types, prompt management and port definitions for the svcfind
//! intent-classification service.
//!
//! The core owns no HTTP stack. Adapters implement [`ports::ClassifierPort`]
//! (outbound model call) and drive [`services::ServiceFinder`] (inbound
//! requests).

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod prompt;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    FALLBACK_SERVICE_ID, FindServiceRequest, FindServiceResponse, HealthResponse, ServiceData,
    ServiceDefinition, ServiceRegistry, UNMAPPED_SERVICE_ID, UNMAPPED_SERVICE_NAME,
};
pub use ports::{ClassifierError, ClassifierPort, ClassifierResult, PromptRendererPort};
pub use prompt::{
    DEFAULT_SYSTEM_PROMPT, PromptConfig, PromptError, PromptFormat, PromptManager, PromptStats,
};
pub use services::{FinderError, ServiceFinder, analyze_coherence};
