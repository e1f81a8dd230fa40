//! Domain types shared by every adapter.

mod classification;
mod service;

pub use classification::{FindServiceRequest, FindServiceResponse, HealthResponse, ServiceData};
pub use service::{
    FALLBACK_SERVICE_ID, ServiceDefinition, ServiceRegistry, UNMAPPED_SERVICE_ID,
    UNMAPPED_SERVICE_NAME,
};
