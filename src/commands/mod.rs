//! # Command System
//!
//! Predicate-based routing of platform requests to intent handlers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export handler infrastructure
pub use context::HandlerInput;
pub use handler::{ExceptionHandler, RequestHandler};
pub use handlers::default_registry;
pub use registry::HandlerRegistry;
