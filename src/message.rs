// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound chat payload. `message` stays untyped so the responder can tell
/// "absent", "wrong type" and "empty" apart; JSON `null` reads as absent.
#[derive(Debug, Default)]
pub struct ChatRequest {
    pub message: Option<Value>,
}

impl ChatRequest {
    /// Only a JSON object carries a message. Arrays and scalars yield none.
    pub fn from_json(body: Value) -> Self {
        let message = match body {
            Value::Object(mut fields) => fields.remove("message").filter(|v| !v.is_null()),
            _ => None,
        };
        Self { message }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub bot_response: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
