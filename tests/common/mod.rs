#![allow(dead_code)]

use reminder_skill::core::RequestEnvelope;
use reminder_skill::Skill;
use serde_json::{json, Value};
use std::sync::Arc;

pub use reminder_skill::testing::{fixed_now, FixedClock, RecordingService};

pub fn skill_with(service: Arc<RecordingService>) -> Skill {
    Skill::new(service).with_clock(Arc::new(FixedClock(fixed_now())))
}

fn system(permissions: Option<Value>) -> Value {
    let mut user = json!({ "userId": "amzn1.ask.account.tester" });
    if let Some(permissions) = permissions {
        user["permissions"] = permissions;
    }
    json!({
        "application": { "applicationId": "amzn1.ask.skill.reminders" },
        "user": user,
        "apiEndpoint": "https://api.amazonalexa.com",
        "apiAccessToken": "api-access-token"
    })
}

fn envelope(request: Value, permissions: Option<Value>) -> RequestEnvelope {
    serde_json::from_value(json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.abc",
            "application": { "applicationId": "amzn1.ask.skill.reminders" },
            "attributes": {},
            "user": { "userId": "amzn1.ask.account.tester" }
        },
        "context": { "System": system(permissions) },
        "request": request
    }))
    .unwrap()
}

pub fn launch() -> RequestEnvelope {
    envelope(
        json!({
            "type": "LaunchRequest",
            "requestId": "amzn1.echo-api.request.launch",
            "timestamp": "2026-10-19T17:00:00Z",
            "locale": "en-US"
        }),
        None,
    )
}

pub fn session_ended() -> RequestEnvelope {
    envelope(
        json!({
            "type": "SessionEndedRequest",
            "requestId": "amzn1.echo-api.request.ended",
            "reason": "USER_INITIATED"
        }),
        None,
    )
}

pub fn intent(name: &str) -> RequestEnvelope {
    intent_with_permissions(name, None)
}

pub fn intent_with_permissions(name: &str, permissions: Option<Value>) -> RequestEnvelope {
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": format!("amzn1.echo-api.request.{name}"),
            "timestamp": "2026-10-19T17:00:00Z",
            "locale": "en-US",
            "intent": { "name": name, "confirmationStatus": "NONE" }
        }),
        permissions,
    )
}

pub fn granted_permissions() -> Value {
    json!({
        "consentToken": "consent-token",
        "scopes": {
            "alexa::alerts:reminders:skill:readwrite": { "status": "GRANTED" }
        }
    })
}
