mod common;

use chrono::NaiveDateTime;
use reminder_skill::commands::handlers::{
    create_exception_handlers, CancelOrStopIntentHandler, HelloWorldIntentHandler,
    HelpIntentHandler, IntentReflectorHandler, LaunchRequestHandler, ReminderIntentHandler,
    SessionEndedRequestHandler,
};
use reminder_skill::commands::{HandlerRegistry, RequestHandler};
use reminder_skill::core::{Card, Response};
use reminder_skill::features::reminders::request::NOTIFICATION_TIME_FORMAT;
use reminder_skill::features::reminders::TIME_ZONE;
use std::sync::Arc;

use common::*;

const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

async fn respond(skill: &reminder_skill::Skill, envelope: reminder_skill::RequestEnvelope) -> Response {
    skill.invoke(envelope).await.unwrap().response
}

#[tokio::test]
async fn launch_welcomes_and_keeps_session_open() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    let response = respond(&skill, launch()).await;
    assert_eq!(
        response.speech_text(),
        Some("Welcome to the reminder skill, try saying notify me to set a one minute reminder?")
    );
    assert!(response.keeps_session_open());
}

#[tokio::test]
async fn hello_world_closes_session() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    let response = respond(&skill, intent("HelloWorldIntent")).await;
    assert_eq!(response.speech_text(), Some("Hello Python World from Classes!"));
    assert!(response.reprompt.is_none());
    assert!(!response.keeps_session_open());
}

#[tokio::test]
async fn reminder_without_permissions_never_calls_service() {
    let service = Arc::new(RecordingService::default());
    let skill = skill_with(service.clone());

    let no_block = respond(&skill, intent("ReminderIntent")).await;
    let no_token = respond(
        &skill,
        intent_with_permissions("ReminderIntent", Some(serde_json::json!({ "scopes": {} }))),
    )
    .await;

    for response in [no_block, no_token] {
        assert_eq!(
            response.speech_text(),
            Some("Please give permissions to set reminders using the alexa app.")
        );
        assert_eq!(
            response.card,
            Some(Card::AskForPermissionsConsent {
                permissions: vec!["alexa::alerts:reminders:skill:readwrite".to_string()]
            })
        );
    }
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn reminder_is_scheduled_sixty_seconds_ahead() {
    let service = Arc::new(RecordingService::default());
    let skill = skill_with(service.clone());

    let response = respond(
        &skill,
        intent_with_permissions("ReminderIntent", Some(granted_permissions())),
    )
    .await;

    assert_eq!(response.speech_text(), Some("Reminder Created"));
    assert!(response.reprompt.is_none());
    assert!(!response.keeps_session_open());

    let calls = service.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (access, request) = &calls[0];
    assert_eq!(access.endpoint, "https://api.amazonalexa.com");
    assert_eq!(access.access_token, "api-access-token");

    let scheduled =
        NaiveDateTime::parse_from_str(&request.trigger.scheduled_time, NOTIFICATION_TIME_FORMAT)
            .unwrap();
    let invoked = fixed_now().with_timezone(&TIME_ZONE).naive_local();
    assert_eq!((scheduled - invoked).num_seconds(), 60);
    assert_eq!(request.trigger.time_zone_id, "America/Los_Angeles");
    assert_eq!(request.request_time, "2026-10-19T10:01:00");
}

#[tokio::test]
async fn repeated_reminders_are_not_deduplicated() {
    let service = Arc::new(RecordingService::default());
    let skill = skill_with(service.clone());

    for _ in 0..2 {
        respond(
            &skill,
            intent_with_permissions("ReminderIntent", Some(granted_permissions())),
        )
        .await;
    }
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn reminder_service_failure_becomes_apology() {
    let service = Arc::new(RecordingService::failing());
    let skill = skill_with(service.clone());

    let response = respond(
        &skill,
        intent_with_permissions("ReminderIntent", Some(granted_permissions())),
    )
    .await;

    assert_eq!(response.speech_text(), Some(APOLOGY));
    assert_eq!(response.reprompt_text(), Some(APOLOGY));
    assert!(response.keeps_session_open());
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn help_and_cancel_stop() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    let help = respond(&skill, intent("AMAZON.HelpIntent")).await;
    assert_eq!(help.speech_text(), Some("You can say hello to me! How can I help?"));
    assert!(help.keeps_session_open());

    for name in ["AMAZON.CancelIntent", "AMAZON.StopIntent"] {
        let response = respond(&skill, intent(name)).await;
        assert_eq!(response.speech_text(), Some("Goodbye!"));
        assert!(!response.keeps_session_open());
    }
}

#[tokio::test]
async fn session_ended_is_silent() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    let response = respond(&skill, session_ended()).await;
    assert_eq!(response, Response::empty());
}

#[tokio::test]
async fn unknown_intents_are_reflected() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    for name in ["AMAZON.FallbackIntent", "OrderPizzaIntent", "helloworldintent"] {
        let response = respond(&skill, intent(name)).await;
        let expected = format!("You just triggered {name}.");
        assert_eq!(response.speech_text(), Some(expected.as_str()));
    }
}

#[tokio::test]
async fn response_envelope_serializes_for_platform() {
    let skill = skill_with(Arc::new(RecordingService::default()));

    let envelope = skill.invoke(intent("HelloWorldIntent")).await.unwrap();
    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "version": "1.0",
            "sessionAttributes": {},
            "response": {
                "outputSpeech": {
                    "type": "SSML",
                    "ssml": "<speak>Hello Python World from Classes!</speak>"
                }
            }
        })
    );
}

fn registry_in_order(exclusive: Vec<Arc<dyn RequestHandler>>) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    for handler in exclusive {
        registry.register(handler);
    }
    registry.register(Arc::new(IntentReflectorHandler));
    for handler in create_exception_handlers() {
        registry.register_exception_handler(handler);
    }
    registry
}

#[tokio::test]
async fn handler_order_does_not_change_results() {
    let exclusive: Vec<Arc<dyn RequestHandler>> = vec![
        Arc::new(LaunchRequestHandler),
        Arc::new(HelloWorldIntentHandler),
        Arc::new(ReminderIntentHandler),
        Arc::new(HelpIntentHandler),
        Arc::new(CancelOrStopIntentHandler),
        Arc::new(SessionEndedRequestHandler),
    ];

    let mut orders = vec![exclusive.clone()];
    let mut reversed = exclusive.clone();
    reversed.reverse();
    orders.push(reversed);
    for shift in 1..exclusive.len() {
        let mut rotated = exclusive.clone();
        rotated.rotate_left(shift);
        orders.push(rotated);
    }

    let requests = || {
        vec![
            launch(),
            session_ended(),
            intent("HelloWorldIntent"),
            intent_with_permissions("ReminderIntent", Some(granted_permissions())),
            intent("ReminderIntent"),
            intent("AMAZON.HelpIntent"),
            intent("AMAZON.CancelIntent"),
            intent("AMAZON.StopIntent"),
            intent("SomethingElseIntent"),
        ]
    };

    let baseline_skill = skill_with(Arc::new(RecordingService::default()));
    let mut baseline = Vec::new();
    for envelope in requests() {
        baseline.push(respond(&baseline_skill, envelope).await);
    }

    for order in orders {
        let skill = skill_with(Arc::new(RecordingService::default()))
            .with_registry(registry_in_order(order));
        for (envelope, expected) in requests().into_iter().zip(&baseline) {
            assert_eq!(&respond(&skill, envelope).await, expected);
        }
    }
}
