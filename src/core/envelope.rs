//! # Request Envelope
//!
//! Inbound request model as delivered by the voice platform.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Expose API endpoint and access token for service calls
//! - 1.0.0: Initial envelope with launch, intent and session-ended requests

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// Envelope
// ============================================================================

/// Top-level request body posted to the skill endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl RequestEnvelope {
    /// Wrap a bare request with no session or context
    pub fn new(request: Request) -> Self {
        Self {
            version: default_version(),
            session: None,
            context: None,
            request,
        }
    }

    /// Permission block granted by the user, if the platform sent one
    pub fn permissions(&self) -> Option<&Permissions> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.system.user.as_ref())
            .and_then(|user| user.permissions.as_ref())
    }

    /// Endpoint and token for calling platform services on the user's behalf
    ///
    /// Returns None unless both halves are present.
    pub fn api_access(&self) -> Option<ApiAccess> {
        let system = &self.context.as_ref()?.system;
        Some(ApiAccess {
            endpoint: system.api_endpoint.clone()?,
            access_token: system.api_access_token.clone()?,
        })
    }

    /// Application id, preferring the context block over the session
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|ctx| ctx.system.application.as_ref())
            .or_else(|| self.session.as_ref().and_then(|s| s.application.as_ref()))
            .map(|app| app.application_id.as_str())
    }

    /// Session attributes to echo back in the response
    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.session.as_ref().and_then(|s| s.attributes.as_ref())
    }
}

// ============================================================================
// Session and Context
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

/// Permissions the user granted to the skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub consent_token: Option<String>,
    #[serde(default)]
    pub scopes: HashMap<String, ScopeGrant>,
}

impl Permissions {
    /// Consent token, treating an empty string as absent
    pub fn consent_token(&self) -> Option<&str> {
        self.consent_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeGrant {
    pub status: String,
}

/// Credentials for platform service calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiAccess {
    pub endpoint: String,
    pub access_token: String,
}

// ============================================================================
// Requests
// ============================================================================

/// The request variants this skill distinguishes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    /// Any request type no handler is written for
    #[serde(other)]
    Other,
}

impl Request {
    /// Platform name of the request type
    pub fn request_type(&self) -> &'static str {
        match self {
            Request::LaunchRequest(_) => "LaunchRequest",
            Request::IntentRequest(_) => "IntentRequest",
            Request::SessionEndedRequest(_) => "SessionEndedRequest",
            Request::Other => "Other",
        }
    }

    /// Intent name, for intent requests only
    pub fn intent_name(&self) -> Option<&str> {
        match self {
            Request::IntentRequest(req) => Some(req.intent.name.as_str()),
            _ => None,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        let meta = match self {
            Request::LaunchRequest(meta) => meta,
            Request::IntentRequest(req) => &req.meta,
            Request::SessionEndedRequest(req) => &req.meta,
            Request::Other => return None,
        };
        Some(meta.request_id.as_str()).filter(|id| !id.is_empty())
    }
}

/// Fields shared by every request type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confirmation_status: None,
            slots: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub error: Option<SessionEndedError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndedError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
}
