//! One-minute reminder creation

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{error, info};

use super::client::ReminderService;
use super::request::ReminderRequest;
use super::REQUIRED_PERMISSIONS;
use crate::core::{ApiAccess, Card, Permissions, Response, ServiceError};

pub const PERMISSIONS_PROMPT: &str = "Please give permissions to set reminders using the alexa app.";
pub const REMINDER_CREATED: &str = "Reminder Created";

/// Create a reminder one minute after `now`, or ask for permission first
///
/// Without a consent token the service is never called. A service failure is
/// logged here and returned unchanged for the caller's error boundary.
pub async fn request_reminder(
    permissions: Option<&Permissions>,
    access: Option<ApiAccess>,
    service: &dyn ReminderService,
    now: DateTime<Utc>,
) -> Result<Response> {
    if permissions.and_then(Permissions::consent_token).is_none() {
        info!("Reminder permission not granted, asking for consent");
        return Ok(permissions_response());
    }

    let request = ReminderRequest::one_minute_from(now);

    let outcome = match access {
        Some(access) => service.create(&access, &request).await,
        None => Err(ServiceError::MissingApiAccess),
    };

    match outcome {
        Ok(confirmation) => {
            info!(
                "Created reminder {} for {}",
                confirmation.alert_token.as_deref().unwrap_or("<no token>"),
                request.trigger.scheduled_time
            );
            Ok(Response::builder().speak(REMINDER_CREATED).build())
        }
        Err(e) => {
            error!("Failed to create reminder: {e}");
            Err(e.into())
        }
    }
}

/// Guidance turn with a consent card naming the reminder scope
pub fn permissions_response() -> Response {
    Response::builder()
        .speak(PERMISSIONS_PROMPT)
        .card(Card::AskForPermissionsConsent {
            permissions: REQUIRED_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
        })
        .build()
}
