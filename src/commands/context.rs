//! Per-request input for handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::{ApiAccess, Permissions, Request, RequestEnvelope};
use crate::features::reminders::{Clock, ReminderService};

/// Everything a handler may look at while building one response
///
/// Created per request; the services are shared with the Skill that built it.
#[derive(Clone)]
pub struct HandlerInput {
    pub envelope: RequestEnvelope,
    pub reminder_service: Arc<dyn ReminderService>,
    pub clock: Arc<dyn Clock>,
}

impl HandlerInput {
    pub fn new(
        envelope: RequestEnvelope,
        reminder_service: Arc<dyn ReminderService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            envelope,
            reminder_service,
            clock,
        }
    }

    pub fn request(&self) -> &Request {
        &self.envelope.request
    }

    pub fn request_type(&self) -> &'static str {
        self.envelope.request.request_type()
    }

    pub fn is_request_type(&self, request_type: &str) -> bool {
        self.request_type() == request_type
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.envelope.request.intent_name()
    }

    /// True only for intent requests with exactly this name
    pub fn is_intent_name(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.envelope.permissions()
    }

    pub fn api_access(&self) -> Option<ApiAccess> {
        self.envelope.api_access()
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
