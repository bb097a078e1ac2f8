//! Error types surfaced by the skill
//!
//! Handlers return `anyhow::Result`; the variants here are the ones callers
//! need to tell apart by downcasting.

use thiserror::Error;

/// Failures of the dispatch pipeline itself
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("no request handler matched request type {request_type}")]
    NoHandler { request_type: String },

    #[error("skill id mismatch: expected {expected}, got {}", .actual.as_deref().unwrap_or("none"))]
    SkillIdMismatch {
        expected: String,
        actual: Option<String>,
    },
}

/// Failure reported by the reminder management service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("reminder service returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("reminder service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request carries no API endpoint or access token")]
    MissingApiAccess,
}

impl ServiceError {
    /// HTTP status returned by the service, when it answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ServiceError::Rejected { status, .. } => Some(*status),
            ServiceError::Transport(err) => err.status().map(|s| s.as_u16()),
            ServiceError::MissingApiAccess => None,
        }
    }
}
