//! Handler registry and dispatch
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Ordered predicate dispatch with exception handler chain
//! - 1.0.0: Initial implementation for handler dispatch

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use super::context::HandlerInput;
use super::handler::{ExceptionHandler, RequestHandler};
use crate::core::{Response, SkillError};

/// Ordered chain of request handlers plus the exception handlers that guard it
///
/// Registration order is significant: the first handler whose predicate
/// matches wins, so catch-all handlers must be registered last.
///
/// # Example
///
/// ```ignore
/// let mut registry = HandlerRegistry::new();
/// registry.register(Arc::new(LaunchRequestHandler));
/// registry.register(Arc::new(IntentReflectorHandler));
/// registry.register_exception_handler(Arc::new(CatchAllExceptionHandler));
///
/// let response = registry.dispatch(&input).await?;
/// ```
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    exception_handlers: Vec<Arc<dyn ExceptionHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request handler to the end of the chain
    pub fn register(&mut self, handler: Arc<dyn RequestHandler>) {
        self.request_handlers.push(handler);
    }

    /// Append an exception handler to the end of the error chain
    pub fn register_exception_handler(&mut self, handler: Arc<dyn ExceptionHandler>) {
        self.exception_handlers.push(handler);
    }

    /// First request handler that claims the input
    pub fn find(&self, input: &HandlerInput) -> Option<Arc<dyn RequestHandler>> {
        self.request_handlers
            .iter()
            .find(|h| h.can_handle(input))
            .cloned()
    }

    /// Route the input to its handler and recover from failures
    ///
    /// A handler error, or a request nothing claims, goes to the first
    /// matching exception handler. Only when none matches does the error
    /// reach the caller.
    pub async fn dispatch(&self, input: &HandlerInput) -> Result<Response> {
        let outcome = match self.find(input) {
            Some(handler) => {
                debug!("Dispatching {} to {}", input.request_type(), handler.name());
                handler.handle(input).await
            }
            None => Err(SkillError::NoHandler {
                request_type: input.request_type().to_string(),
            }
            .into()),
        };

        let error = match outcome {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };

        match self
            .exception_handlers
            .iter()
            .find(|h| h.can_handle(input, &error))
        {
            Some(handler) => handler.handle(input, &error).await,
            None => {
                warn!("No exception handler for error: {error}");
                Err(error)
            }
        }
    }

    /// Number of request handlers
    pub fn len(&self) -> usize {
        self.request_handlers.len()
    }

    /// Check if registry has no request handlers
    pub fn is_empty(&self) -> bool {
        self.request_handlers.is_empty()
    }

    /// Request handler names in dispatch order
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.request_handlers.iter().map(|h| h.name()).collect()
    }
}
