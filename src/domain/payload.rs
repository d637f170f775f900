//! Webhook request payload.

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Payload delivered to the webhook.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestPayload {
    /// Template to load, relative to the template directory.
    pub filename: String,
    /// Flat overrides merged over every story.
    pub data: Option<Map<String, Value>>,
    /// Values substituted into `{placeholder}` tokens of string fields.
    pub string_replacement: Option<Map<String, Value>>,
}

impl RequestPayload {
    /// Extract the payload sections. Performs no I/O.
    pub fn from_json(payload: Option<&Value>) -> Result<Self, AppError> {
        let payload = match payload {
            None | Some(Value::Null) => {
                return Err(AppError::missing_parameters("Empty payload"));
            }
            Some(payload) => payload,
        };

        let filename = match payload.get("filename") {
            Some(Value::String(filename)) => filename.clone(),
            Some(_) => {
                return Err(AppError::InvalidPayload("'filename' must be a string".to_string()));
            }
            None => {
                return Err(AppError::missing_parameters(
                    "Missing 'filename' attribute in the HTTP payload",
                ));
            }
        };

        Ok(Self {
            filename,
            data: object_section(payload, "data")?,
            string_replacement: object_section(payload, "string_replacement")?,
        })
    }
}

fn object_section(payload: &Value, key: &str) -> Result<Option<Map<String, Value>>, AppError> {
    match payload.get(key) {
        None => Ok(None),
        Some(Value::Object(section)) => Ok(Some(section.clone())),
        Some(_) => Err(AppError::InvalidPayload(format!("'{key}' must be a JSON object"))),
    }
}
