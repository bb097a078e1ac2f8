//! Request and exception handler traits
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for predicate-based dispatch

use anyhow::{Error, Result};
use async_trait::async_trait;

use super::context::HandlerInput;
use crate::core::Response;

/// Trait for request handlers
///
/// Each handler claims requests through `can_handle` and builds the turn in
/// `handle`. Handlers are registered with a HandlerRegistry, which asks them
/// in registration order.
///
/// # Example
///
/// ```ignore
/// pub struct GoodbyeHandler;
///
/// #[async_trait]
/// impl RequestHandler for GoodbyeHandler {
///     fn name(&self) -> &'static str {
///         "Goodbye"
///     }
///
///     fn can_handle(&self, input: &HandlerInput) -> bool {
///         input.is_intent_name("GoodbyeIntent")
///     }
///
///     async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
///         Ok(Response::builder().speak("Bye").build())
///     }
/// }
/// ```
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Whether this handler claims the request
    fn can_handle(&self, input: &HandlerInput) -> bool;

    /// Build the response for a claimed request
    async fn handle(&self, input: &HandlerInput) -> Result<Response>;
}

/// Trait for handlers that turn a failed dispatch into a response
#[async_trait]
pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput, error: &Error) -> bool;

    async fn handle(&self, input: &HandlerInput, error: &Error) -> Result<Response>;
}
