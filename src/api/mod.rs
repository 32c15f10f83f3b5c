//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod notes;
pub mod parsing;
pub mod summarize;

// Re-export the main handler for convenience
pub use handler::{handler, route};
