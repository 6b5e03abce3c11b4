use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

// -------------------------
// Error payloads
// -------------------------

/// Body of a 400 for a malformed or non-positive path id.
#[derive(Debug, Serialize)]
pub struct InvalidIdBody {
    pub error: &'static str,
    /// The id as received: a number when it parsed, otherwise the raw text.
    pub id: Value,
}

/// Body of a 400 for an absent or unusable request payload.
#[derive(Debug, Serialize)]
pub struct InvalidBody {
    pub error: &'static str,
    pub message: String,
}

/// Structured body shared by 404 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub timestamp: String,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorDetails {
    pub fn new(
        status: u16,
        error: &'static str,
        message: impl Into<String>,
        path: Option<String>,
    ) -> Self {
        Self {
            timestamp: format_timestamp(Utc::now()),
            status,
            error,
            message: message.into(),
            path,
        }
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
