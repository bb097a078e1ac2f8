//! Built-in platform intent handlers
//!
//! Handles: AMAZON.HelpIntent, AMAZON.CancelIntent, AMAZON.StopIntent, SessionEndedRequest

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::context::HandlerInput;
use crate::commands::handler::RequestHandler;
use crate::core::{Request, Response};

pub const HELP: &str = "You can say hello to me! How can I help?";
pub const GOODBYE: &str = "Goodbye!";

const CANCEL_OR_STOP_INTENTS: &[&str] = &["AMAZON.CancelIntent", "AMAZON.StopIntent"];

pub struct HelpIntentHandler;

#[async_trait]
impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "AMAZON.HelpIntent"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent_name("AMAZON.HelpIntent")
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(HELP).ask(HELP).build())
    }
}

/// Single handler for both cancel and stop
pub struct CancelOrStopIntentHandler;

#[async_trait]
impl RequestHandler for CancelOrStopIntentHandler {
    fn name(&self) -> &'static str {
        "CancelOrStop"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        CANCEL_OR_STOP_INTENTS
            .iter()
            .any(|name| input.is_intent_name(name))
    }

    async fn handle(&self, _input: &HandlerInput) -> Result<Response> {
        Ok(Response::builder().speak(GOODBYE).build())
    }
}

/// Acknowledges the end of a session with an empty response
pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "SessionEndedRequest"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_request_type("SessionEndedRequest")
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        if let Request::SessionEndedRequest(ended) = input.request() {
            let reason = ended.reason.as_deref().unwrap_or("UNKNOWN");
            match &ended.error {
                Some(err) => info!(
                    "Session ended ({reason}): {} {}",
                    err.kind,
                    err.message.as_deref().unwrap_or("")
                ),
                None => info!("Session ended ({reason})"),
            }
        }

        Ok(Response::empty())
    }
}
