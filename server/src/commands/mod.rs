//! HTTP handlers
//!
//! These handlers bridge requests to the Rust core. JSON endpoints answer
//! with a `{ success, data, error }` envelope.

pub mod bangs;
pub mod navigation;
pub mod opensearch;
pub mod settings;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub type CommandResponse<T> = (StatusCode, Json<CommandResult<T>>);

/// Map a core result onto the envelope and an HTTP status.
pub fn respond<T>(result: unduck_core::Result<T>) -> CommandResponse<T> {
    match result {
        Ok(data) => (StatusCode::OK, Json(CommandResult::ok(data))),
        Err(e) if e.is_invalid_input() => {
            (StatusCode::BAD_REQUEST, Json(CommandResult::err(e.to_string())))
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CommandResult::err(e.to_string())),
            )
        }
    }
}

/// Answer a request axum could not extract (bad JSON body, bad query
/// string) with the envelope instead of a plain-text rejection.
pub fn reject<T>(rejection: impl std::fmt::Display) -> CommandResponse<T> {
    tracing::debug!("Rejected request: {}", rejection);
    (
        StatusCode::BAD_REQUEST,
        Json(CommandResult::err(rejection.to_string())),
    )
}
