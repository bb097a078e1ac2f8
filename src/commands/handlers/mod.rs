//! Per-intent handler implementations
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Add IntentReflectorHandler as the final catch-all
//! - 1.0.0: Initial launch, hello, reminder, help, cancel/stop and session-ended handlers

pub mod builtin;
pub mod exception;
pub mod launch;
pub mod reflector;
pub mod remind;

use std::sync::Arc;

use super::handler::{ExceptionHandler, RequestHandler};
use super::registry::HandlerRegistry;

pub use builtin::{CancelOrStopIntentHandler, HelpIntentHandler, SessionEndedRequestHandler};
pub use exception::CatchAllExceptionHandler;
pub use launch::{HelloWorldIntentHandler, LaunchRequestHandler};
pub use reflector::IntentReflectorHandler;
pub use remind::ReminderIntentHandler;

/// Create all request handlers in dispatch order
///
/// The reflector claims every intent request, so it stays last.
pub fn create_request_handlers() -> Vec<Arc<dyn RequestHandler>> {
    vec![
        Arc::new(LaunchRequestHandler),
        Arc::new(HelloWorldIntentHandler),
        Arc::new(ReminderIntentHandler),
        Arc::new(HelpIntentHandler),
        Arc::new(CancelOrStopIntentHandler),
        Arc::new(SessionEndedRequestHandler),
        Arc::new(IntentReflectorHandler),
    ]
}

pub fn create_exception_handlers() -> Vec<Arc<dyn ExceptionHandler>> {
    vec![Arc::new(CatchAllExceptionHandler)]
}

/// Registry with every handler this skill ships
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    for handler in create_request_handlers() {
        registry.register(handler);
    }
    for handler in create_exception_handlers() {
        registry.register_exception_handler(handler);
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflector_is_last() {
        let registry = default_registry();
        assert_eq!(
            registry.handler_names(),
            vec![
                "LaunchRequest",
                "HelloWorldIntent",
                "ReminderIntent",
                "AMAZON.HelpIntent",
                "CancelOrStop",
                "SessionEndedRequest",
                "IntentReflector",
            ]
        );
    }
}
