//! Launch and hello-world handlers
//!
//! Handles: LaunchRequest, HelloWorldIntent
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::context::HandlerInput;
use crate::commands::handler::RequestHandler;
use crate::core::Response;

pub const WELCOME: &str =
    "Welcome to the reminder skill, try saying notify me to set a one minute reminder?";
pub const HELLO_WORLD: &str = "Hello Python World from Classes!";

/// Greets the user when the skill is opened without an intent
pub struct LaunchRequestHandler;

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "LaunchRequest"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_request_type("LaunchRequest")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(WELCOME).ask(WELCOME).build())
    }
}

pub struct HelloWorldIntentHandler;

#[async_trait]
impl RequestHandler for HelloWorldIntentHandler {
    fn name(&self) -> &'static str {
        "HelloWorldIntent"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent_name("HelloWorldIntent")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(HELLO_WORLD).build())
    }
}
