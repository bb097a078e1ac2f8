//! Reminder request payload for the reminder management API

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::response::escape_speech;

use super::{REMINDER_LOCALE, REMINDER_TEXT, TIME_ZONE, TIME_ZONE_ID};

/// Local timestamp format expected by the service (no UTC offset)
pub const NOTIFICATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How far ahead of the request the reminder fires
pub fn reminder_delay() -> Duration {
    Duration::minutes(1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub request_time: String,
    pub trigger: Trigger,
    pub alert_info: AlertInfo,
    pub push_notification: PushNotification,
}

impl ReminderRequest {
    /// Build the one-minute reminder relative to `now`
    ///
    /// The notification time is always derived here and never cached.
    pub fn one_minute_from(now: DateTime<Utc>) -> Self {
        let notification_time = notification_time(now, TIME_ZONE);

        Self {
            request_time: notification_time.clone(),
            trigger: Trigger {
                kind: TriggerType::ScheduledAbsolute,
                scheduled_time: notification_time,
                time_zone_id: TIME_ZONE_ID.to_string(),
            },
            alert_info: AlertInfo {
                spoken_info: SpokenInfo {
                    content: vec![SpokenText::new(REMINDER_LOCALE, REMINDER_TEXT)],
                },
            },
            push_notification: PushNotification {
                status: PushNotificationStatus::Enabled,
            },
        }
    }
}

/// Format `now + delay` as a local timestamp in `tz`
pub fn notification_time(now: DateTime<Utc>, tz: Tz) -> String {
    (now.with_timezone(&tz) + reminder_delay())
        .format(NOTIFICATION_TIME_FORMAT)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    pub scheduled_time: String,
    pub time_zone_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    ScheduledAbsolute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub spoken_info: SpokenInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenInfo {
    pub content: Vec<SpokenText>,
}

/// One spoken alert segment; text and SSML carry the same words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenText {
    pub locale: String,
    pub text: String,
    pub ssml: String,
}

impl SpokenText {
    pub fn new(locale: &str, text: &str) -> Self {
        Self {
            locale: locale.to_string(),
            text: text.to_string(),
            ssml: format!("<speak>{}</speak>", escape_speech(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    pub status: PushNotificationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushNotificationStatus {
    Enabled,
}

/// What the service returns after creating a reminder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderConfirmation {
    #[serde(default)]
    pub alert_token: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub updated_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}
