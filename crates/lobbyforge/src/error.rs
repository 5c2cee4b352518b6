//! Error types for the service layer and the server as a whole.

use std::num::ParseIntError;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lobbyforge_room::RoomError;
use serde_json::json;

/// Errors returned by domain services.
///
/// Each variant maps to one HTTP status through
/// [`status_code`](Self::status_code), so handlers can return
/// `Result<_, ServiceError>` and let axum render the failure.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request was well-formed JSON but a field failed validation,
    /// or the body could not be decoded at all.
    #[error("{0}")]
    Validation(String),

    /// A keyed record (player, bag, mailbox) does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// The record being created already exists.
    #[error("{0}")]
    Conflict(String),

    /// Unknown username or wrong password. Deliberately doesn't say which.
    #[error("invalid credentials")]
    Unauthorized,

    #[error(transparent)]
    Room(#[from] RoomError),
}

impl ServiceError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Room(RoomError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Room(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            Self::Room(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Invalid server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number of seconds")]
    InvalidSeconds {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{var}={value:?} is not a boolean (expected true/false/1/0)")]
    InvalidBool { var: &'static str, value: String },
}

/// Top-level error that wraps every crate-specific error.
///
/// The `#[from]` attributes let `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum LobbyforgeError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
