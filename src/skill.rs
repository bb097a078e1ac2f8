//! # Skill
//!
//! The immutable skill value built once at startup: handler chain, services
//! and the optional application id check.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::commands::{default_registry, HandlerInput, HandlerRegistry};
use crate::core::{Config, RequestEnvelope, ResponseEnvelope, SkillError};
use crate::features::reminders::{Clock, HttpReminderClient, ReminderService, SystemClock};

#[derive(Clone)]
pub struct Skill {
    registry: HandlerRegistry,
    reminder_service: Arc<dyn ReminderService>,
    clock: Arc<dyn Clock>,
    skill_id: Option<String>,
}

impl Skill {
    /// Skill with the default handler chain and the given reminder service
    pub fn new(reminder_service: Arc<dyn ReminderService>) -> Self {
        Self {
            registry: default_registry(),
            reminder_service,
            clock: Arc::new(SystemClock),
            skill_id: None,
        }
    }

    /// Production skill talking to the real reminder API
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpReminderClient::new(config.reminder_api_timeout)?;
        let mut skill = Self::new(Arc::new(client));
        if let Some(id) = &config.skill_id {
            skill = skill.with_skill_id(id);
        }
        Ok(skill)
    }

    pub fn with_registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Reject requests addressed to any other application id
    pub fn with_skill_id(mut self, skill_id: &str) -> Self {
        self.skill_id = Some(skill_id.to_string());
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Handle one request envelope end to end
    ///
    /// Handler failures are converted by the exception chain; a skill id
    /// mismatch is returned as `SkillError::SkillIdMismatch` without dispatch.
    pub async fn invoke(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope> {
        let request_id = envelope.request.request_id().unwrap_or("-").to_string();
        info!(
            "[{request_id}] Received {} {}",
            envelope.request.request_type(),
            envelope.request.intent_name().unwrap_or("")
        );

        self.verify_skill_id(&envelope)?;

        let session_attributes = envelope.session_attributes().cloned();
        let input = HandlerInput::new(
            envelope,
            Arc::clone(&self.reminder_service),
            Arc::clone(&self.clock),
        );

        let response = self.registry.dispatch(&input).await?;
        debug!("[{request_id}] Responding: {:?}", response.speech_text());

        Ok(ResponseEnvelope::new(response, session_attributes))
    }

    fn verify_skill_id(&self, envelope: &RequestEnvelope) -> Result<(), SkillError> {
        let Some(expected) = &self.skill_id else {
            return Ok(());
        };
        let actual = envelope.application_id();
        if actual == Some(expected.as_str()) {
            return Ok(());
        }
        Err(SkillError::SkillIdMismatch {
            expected: expected.clone(),
            actual: actual.map(str::to_string),
        })
    }
}
