//! Application services built on the ports.

pub mod coherence;
pub mod finder;

pub use coherence::analyze_coherence;
pub use finder::{FinderError, ServiceFinder};
