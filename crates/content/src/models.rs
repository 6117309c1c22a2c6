use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply text for every accepted contact submission.
pub const CONTACT_ACK_MESSAGE: &str = "Message received. Will respond shortly!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub github: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Serialized as `null` when the project has no public page.
    pub url: Option<String>,
}

/// Fields a contact post must carry with a truthy value.
pub const REQUIRED_CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// A contact form post as the page sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: None,
            message: Some(message.into()),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

/// Loose truthiness of a posted value: `null`, `false`, zero and the empty
/// string count as absent. Whitespace, arrays and objects are content.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Required contact fields that are absent or falsy in a posted body.
/// Field content is never inspected beyond that, and nothing is trimmed.
/// A body that is not an object has every field missing.
pub fn missing_contact_fields(body: &Value) -> Vec<&'static str> {
    REQUIRED_CONTACT_FIELDS
        .into_iter()
        .filter(|field| !body.get(field).is_some_and(is_truthy))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_ACK_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok_at(now: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
