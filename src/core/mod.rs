//! # Core Module
//!
//! Request and response models, configuration, and error types for the skill.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add error module with skill and service errors
//! - 1.0.0: Initial creation with config, envelope and response modules

pub mod config;
pub mod envelope;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use envelope::{ApiAccess, Intent, Permissions, Request, RequestEnvelope, RequestMeta};
pub use error::{ServiceError, SkillError};
pub use response::{Card, OutputSpeech, Response, ResponseBuilder, ResponseEnvelope};
