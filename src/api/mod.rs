//! HTTP surface and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the router builder for convenience
pub use handler::{AppState, create_router};
