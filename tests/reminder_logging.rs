mod common;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::{Arc, Once};

use common::*;

thread_local! {
    static ERRORS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Collects error-level records per thread so parallel tests stay isolated
struct CountingLogger;

impl Log for CountingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Error
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            ERRORS.with(|errors| errors.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger;
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    ERRORS.with(|errors| errors.borrow_mut().clear());
}

fn logged_errors() -> Vec<String> {
    ERRORS.with(|errors| errors.borrow().clone())
}

#[tokio::test]
async fn service_failure_is_logged_exactly_once() {
    install_logger();
    let skill = skill_with(Arc::new(RecordingService::failing()));

    let envelope = skill
        .invoke(intent_with_permissions(
            "ReminderIntent",
            Some(granted_permissions()),
        ))
        .await
        .unwrap();

    assert!(envelope.response.keeps_session_open());
    let errors = logged_errors();
    assert_eq!(errors.len(), 1, "errors logged: {errors:?}");
    assert!(errors[0].contains("Service Unavailable"));
}

#[tokio::test]
async fn successful_reminder_logs_no_errors() {
    install_logger();
    let skill = skill_with(Arc::new(RecordingService::default()));

    skill
        .invoke(intent_with_permissions(
            "ReminderIntent",
            Some(granted_permissions()),
        ))
        .await
        .unwrap();

    assert!(logged_errors().is_empty());
}
