//! Intent reflector
//!
//! Repeats the name of any intent that reached it. Used for interaction model
//! testing; it claims every intent request, so it must be registered last.

use anyhow::Result;
use async_trait::async_trait;

use crate::commands::context::HandlerInput;
use crate::commands::handler::RequestHandler;
use crate::core::Response;

pub struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn name(&self) -> &'static str {
        "IntentReflector"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_request_type("IntentRequest")
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        let intent_name = input.intent_name().unwrap_or_default();
        let speech = format!("You just triggered {intent_name}.");

        Ok(Response::builder().speak(&speech).build())
    }
}
