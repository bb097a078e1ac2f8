//! Reminder intent handler
//!
//! Handles: ReminderIntent
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.0.0: Delegate to the reminders feature with an injected clock
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::commands::context::HandlerInput;
use crate::commands::handler::RequestHandler;
use crate::core::Response;
use crate::features::reminders::request_reminder;

/// Schedules a reminder one minute from now
pub struct ReminderIntentHandler;

#[async_trait]
impl RequestHandler for ReminderIntentHandler {
    fn name(&self) -> &'static str {
        "ReminderIntent"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        input.is_intent_name("ReminderIntent")
    }

    async fn handle(&self, input: &HandlerInput) -> Result<Response> {
        let now = input.now();
        debug!("Reminder requested at {now}");

        request_reminder(
            input.permissions(),
            input.api_access(),
            input.reminder_service.as_ref(),
            now,
        )
        .await
    }
}
