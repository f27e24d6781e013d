use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use serde_json::Value;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let body = body.map_err(|rejection| {
        AppError::unexpected(rejection.body_text(), state.verbose_errors)
    })?;

    // Non-JSON and empty bodies are left unparsed, so the request simply has no message.
    let blank = body.iter().all(u8::is_ascii_whitespace);
    let request = if blank || !is_json_content_type(&headers) {
        ChatRequest::default()
    } else {
        let Json(value) = Json::<Value>::from_bytes(&body).map_err(|rejection| {
            AppError::unexpected(rejection.body_text(), state.verbose_errors)
        })?;
        ChatRequest::from_json(value)
    };

    tracing::info!(message = ?request.message, "received chat request");

    let response = chatbot::respond(request.message.as_ref()).inspect_err(|err| {
        tracing::info!(error = %err, "rejected chat request");
    })?;

    tracing::info!(bot_response = %response.bot_response, "chat reply");

    Ok(Json(response))
}

// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
