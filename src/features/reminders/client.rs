//! # Reminder Service Client
//!
//! HTTP client for the platform's reminder management API.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Accept 2xx responses whose body is empty or not a confirmation
//! - 1.0.0: Create reminders over HTTP

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

use super::request::{ReminderConfirmation, ReminderRequest};
use crate::core::{ApiAccess, ServiceError};

/// Path of the create-reminder operation, relative to the API endpoint
const REMINDERS_PATH: &str = "/v1/alerts/reminders";

/// Creates reminders on behalf of a user
///
/// Implemented over HTTP in production and by recording mocks in tests.
#[async_trait]
pub trait ReminderService: Send + Sync {
    async fn create(
        &self,
        access: &ApiAccess,
        request: &ReminderRequest,
    ) -> Result<ReminderConfirmation, ServiceError>;
}

/// Reminder service reached through the endpoint given in each request
#[derive(Clone)]
pub struct HttpReminderClient {
    http: reqwest::Client,
}

impl HttpReminderClient {
    pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ReminderService for HttpReminderClient {
    async fn create(
        &self,
        access: &ApiAccess,
        request: &ReminderRequest,
    ) -> Result<ReminderConfirmation, ServiceError> {
        let url = reminders_url(&access.endpoint);
        debug!("Creating reminder at {url} for {}", request.trigger.scheduled_time);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&access.access_token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Rejected {
                status,
                message: error_message(&body),
            });
        }

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(confirmation_from(status, &body))
    }
}

/// Decode a success body; the reminder exists even if the body is unreadable
fn confirmation_from(status: u16, body: &str) -> ReminderConfirmation {
    if body.trim().is_empty() {
        warn!("Reminder API returned {status} with an empty body");
        return ReminderConfirmation::default();
    }
    serde_json::from_str(body).unwrap_or_else(|e| {
        warn!("Reminder API returned {status} with an unreadable body: {e}");
        ReminderConfirmation::default()
    })
}

fn reminders_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), REMINDERS_PATH)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull the `message` field out of an error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string())
}
