//! Catch-all exception handler
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Service errors are already logged where they occur; log them at debug here
//! - 1.0.0: Initial apology response for any handler failure

use anyhow::{Error, Result};
use async_trait::async_trait;
use log::{debug, error};

use crate::commands::context::HandlerInput;
use crate::commands::handler::ExceptionHandler;
use crate::core::{Response, ServiceError};

pub const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Turns any failure into the same apology, leaving the session open
pub struct CatchAllExceptionHandler;

#[async_trait]
impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput, _error: &Error) -> bool {
        true
    }

    async fn handle(&self, input: &HandlerInput, err: &Error) -> Result<Response> {
        let request_id = input.request().request_id().unwrap_or("-");
        if err.downcast_ref::<ServiceError>().is_some() {
            debug!("[{request_id}] Recovering from service error: {err}");
        } else {
            error!("[{request_id}] Handler failed: {err:?}");
        }

        Ok(Response::builder().speak(APOLOGY).ask(APOLOGY).build())
    }
}
