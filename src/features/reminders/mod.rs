//! # Reminders Feature
//!
//! One-minute reminders scheduled through the platform's reminder API.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Injectable clock so scheduled times are deterministic under test
//! - 1.0.0: Initial release with HTTP client and consent handling

pub mod client;
pub mod clock;
pub mod request;
pub mod requester;

use chrono_tz::Tz;

/// Scopes the user must grant before reminders can be created
pub const REQUIRED_PERMISSIONS: &[&str] = &["alexa::alerts:reminders:skill:readwrite"];

/// Every reminder is scheduled in this zone
pub const TIME_ZONE_ID: &str = "America/Los_Angeles";
pub const TIME_ZONE: Tz = chrono_tz::America::Los_Angeles;

pub const REMINDER_LOCALE: &str = "en-US";
pub const REMINDER_TEXT: &str = "This is your reminder";

pub use client::{HttpReminderClient, ReminderService};
pub use clock::{Clock, SystemClock};
pub use request::{ReminderConfirmation, ReminderRequest};
pub use requester::{permissions_response, request_reminder};
