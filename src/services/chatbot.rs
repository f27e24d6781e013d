use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{error::ValidationError, message::ChatResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    WellBeing,
    Unknown,
}

/// Matches on the trimmed, lowercased message. Whole-phrase matches only.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.trim().to_lowercase();

    match msg_lower.as_str() {
        "hello" => Intent::Greeting,
        "how are you?" => Intent::WellBeing,
        _ => Intent::Unknown,
    }
}

/// Unknown messages are echoed back exactly as received, surrounding
/// whitespace and casing included.
pub fn generate_reply(user_msg: &str) -> String {
    use Intent::*;

    match detect_intent(user_msg) {
        Greeting => "Hi there!".to_string(),
        WellBeing => "I'm just a bot, but I'm doing great!".to_string(),
        Unknown => format!("You said: {}", user_msg),
    }
}

/// Presence, type, then non-blank check.
pub fn validate_message(message: Option<&Value>) -> Result<&str, ValidationError> {
    let Some(value) = message else {
        return Err(ValidationError);
    };
    let Value::String(text) = value else {
        return Err(ValidationError);
    };
    if text.trim().is_empty() {
        return Err(ValidationError);
    }
    Ok(text)
}

pub fn respond(message: Option<&Value>) -> Result<ChatResponse, ValidationError> {
    let user_msg = validate_message(message)?;
    let bot_response = generate_reply(user_msg);

    Ok(ChatResponse {
        bot_response,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
