// src/routes/mod.rs
pub mod chat;

use std::any::Any;
use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    state::{AppState, SharedState},
};
use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(base_path: &str) -> Router<SharedState> {
    Router::new()
        .route(base_path, post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Full application: routes, state, CORS, panic recovery and the optional
/// static frontend.
pub fn build_app(config: &Config) -> Router {
    with_host_layers(create_router(&config.base_path), config)
}

/// Attaches state and the host layers to `router`.
pub fn with_host_layers(router: Router<SharedState>, config: &Config) -> Router {
    let state: SharedState = Arc::new(AppState::from(config));
    let panic_state = state.clone();

    let mut app = router;
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.with_state(state)
        .layer(cors_layer(config))
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn Any + Send + 'static>| panic_response(panic, &panic_state),
        ))
}

fn cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods(cors::Any)
            .allow_headers(cors::Any),
        None => CorsLayer::permissive(),
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, state: &AppState) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::unexpected(message, state.verbose_errors).into_response()
}
