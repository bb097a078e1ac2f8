//! # Test Fixtures
//!
//! Fixed clock and recording reminder service shared by unit and integration
//! tests. Compiled for `cfg(test)` and behind the `testing` feature.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use crate::commands::HandlerInput;
use crate::core::{ApiAccess, Request, RequestEnvelope, ServiceError};
use crate::features::reminders::{Clock, ReminderConfirmation, ReminderRequest, ReminderService};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2026-10-19 17:00:00 UTC, which is 10:00:00 in Los Angeles
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 17, 0, 0).unwrap()
}

/// Records every call; fails each call with a 503 when `fail` is set
#[derive(Default)]
pub struct RecordingService {
    pub calls: Mutex<Vec<(ApiAccess, ReminderRequest)>>,
    pub fail: bool,
}

impl RecordingService {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Reminder requests received, in call order
    pub fn requests(&self) -> Vec<ReminderRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }
}

#[async_trait]
impl ReminderService for RecordingService {
    async fn create(
        &self,
        access: &ApiAccess,
        request: &ReminderRequest,
    ) -> Result<ReminderConfirmation, ServiceError> {
        self.calls
            .lock()
            .unwrap()
            .push((access.clone(), request.clone()));
        if self.fail {
            return Err(ServiceError::Rejected {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(ReminderConfirmation {
            alert_token: Some("alert-token-1".to_string()),
            status: Some("ON".to_string()),
            ..ReminderConfirmation::default()
        })
    }
}

pub fn input_with(envelope: RequestEnvelope, service: Arc<RecordingService>) -> HandlerInput {
    HandlerInput::new(envelope, service, Arc::new(FixedClock(fixed_now())))
}

pub fn input_for(request: Request) -> HandlerInput {
    input_with(
        RequestEnvelope::new(request),
        Arc::new(RecordingService::default()),
    )
}
