use std::collections::HashMap;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use content::{missing_contact_fields, ContactAck};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::{AppError, MISSING_FIELDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let essence = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());
    match essence.as_deref() {
        Some("application/json") => BodyKind::Json,
        Some("application/x-www-form-urlencoded") => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

/// Contact form body as loosely typed JSON. An empty body, or one in a
/// content type we do not parse, reads as `{}` so the presence check
/// reports every field missing. Undecodable JSON is a server fault.
pub struct ContactBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| anyhow!("Failed to read request body: {}", e.body_text()))?;
                parse_json(&bytes)?
            }
            BodyKind::Form => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| anyhow!("Failed to decode form body: {}", e.body_text()))?;
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect::<Map<_, _>>()
                    .into()
            }
            BodyKind::Other => Value::Object(Map::new()),
        };

        Ok(Self(body))
    }
}

/// Only objects and arrays are accepted at the top level.
fn parse_json(bytes: &[u8]) -> anyhow::Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_json::from_slice(bytes).context("Malformed JSON body")?;
    if !(value.is_object() || value.is_array()) {
        return Err(anyhow!("JSON body must be an object or array"));
    }
    Ok(value)
}

/// POST /api/contact
/// Presence check only; accepted submissions are logged, not stored or sent.
pub async fn handle_contact(ContactBody(body): ContactBody) -> Result<Json<ContactAck>, AppError> {
    let missing = missing_contact_fields(&body);
    if !missing.is_empty() {
        debug!(?missing, "Contact submission rejected");
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    info!(
        name = %body["name"],
        email = %body["email"],
        subject = %body["subject"],
        message = %body["message"],
        "Contact form submission"
    );

    Ok(Json(ContactAck::received()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_json_is_empty_object() {
        assert_eq!(parse_json(b"").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse_json(b" \n").unwrap(), Value::Object(Map::new()));
    }

    #[test]
    fn test_top_level_primitives_are_rejected() {
        assert!(parse_json(b"\"Jo\"").is_err());
        assert!(parse_json(b"42").is_err());
        assert!(parse_json(b"[]").is_ok());
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = parse_json(b"{\"name\": ").unwrap_err();
        assert!(err.to_string().contains("Malformed JSON body"));
    }
}
