//! Spoken response model and builder
//!
//! - **Version**: 2.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 2.1.0: Escape reserved characters in plain text speech; add simple card
//! - 2.0.0: Add response envelope echoing session attributes
//! - 1.1.0: Add permissions consent card
//! - 1.0.0: SSML output speech with reprompt and session flag

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Platform protocol version written on every response
pub const RESPONSE_VERSION: &str = "1.0";

/// Strip any existing `<speak>` wrapper and surrounding whitespace
fn trim_speech(speech: &str) -> &str {
    let speech = speech.trim();
    speech
        .strip_prefix("<speak>")
        .and_then(|s| s.strip_suffix("</speak>"))
        .map(str::trim)
        .unwrap_or(speech)
}

/// Escape the characters SSML reserves in text content
pub(crate) fn escape_speech(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape_speech(ssml: &str) -> String {
    ssml.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Output speech in speech-markup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    PlainText { text: String },
}

impl OutputSpeech {
    /// Wrap plain text as SSML
    ///
    /// Text already wrapped in `<speak>` is taken as markup and kept as is;
    /// anything else is escaped.
    pub fn ssml(text: &str) -> Self {
        let trimmed = text.trim();
        let body = if trimmed.starts_with("<speak>") && trimmed.ends_with("</speak>") {
            trim_speech(trimmed).to_string()
        } else {
            escape_speech(trimmed)
        };
        OutputSpeech::Ssml {
            ssml: format!("<speak>{body}</speak>"),
        }
    }

    /// The speech body without the `<speak>` wrapper, still in markup form
    pub fn text(&self) -> &str {
        match self {
            OutputSpeech::Ssml { ssml } => trim_speech(ssml),
            OutputSpeech::PlainText { text } => text,
        }
    }

    /// The spoken words with entity escapes resolved
    pub fn plain_text(&self) -> String {
        match self {
            OutputSpeech::Ssml { ssml } => unescape_speech(trim_speech(ssml)),
            OutputSpeech::PlainText { text } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// UI card shown in the companion app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Asks the user to grant the listed permission scopes
    AskForPermissionsConsent { permissions: Vec<String> },
    /// Title and body text
    Simple { title: String, content: String },
}

/// A single turn of the conversation returned to the platform
///
/// An unset `should_end_session` leaves the decision to the platform, which
/// closes the session for voice-only devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    /// A response with nothing to say
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    /// Spoken text without the SSML wrapper
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text())
    }

    /// Whether the platform will keep listening after this response
    pub fn keeps_session_open(&self) -> bool {
        self.should_end_session == Some(false)
    }
}

/// Chainable builder mirroring how handlers compose a turn
///
/// # Example
///
/// ```ignore
/// let response = Response::builder()
///     .speak("How can I help?")
///     .ask("How can I help?")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn speak(mut self, speech: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(speech));
        self
    }

    /// Set a reprompt and keep the session open
    pub fn ask(mut self, reprompt: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(reprompt),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn card(mut self, card: Card) -> Self {
        self.response.card = Some(card);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}

/// Top-level body returned to the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(response: Response, session_attributes: Option<Map<String, Value>>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response,
        }
    }
}
