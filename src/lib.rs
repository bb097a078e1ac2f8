// Core layer - request/response models, configuration and errors
pub mod core;

// Features layer - reminder scheduling
pub mod features;

// Application layer - handler chain and skill entry point
pub mod commands;
pub mod skill;

// Hosting layer - HTTP endpoint
pub mod server;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export the common entry points
pub use crate::core::{Config, RequestEnvelope, Response, ResponseEnvelope};
pub use skill::Skill;

// Re-export feature items
pub use features::reminders::{
    Clock, HttpReminderClient, ReminderConfirmation, ReminderRequest, ReminderService, SystemClock,
};
