//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

// Errors

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

pub enum ApiError {
    /// The caller sent something we won't process. The message is
    /// shown to the caller.
    BadRequest {
        message: String,
        fields: Vec<String>,
    },
    /// Anything that went wrong on our side. Only logged, never shown
    /// to the caller.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self::BadRequest {
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn invalid_fields(message: &str, fields: Vec<String>) -> Self {
        Self::BadRequest {
            message: message.to_string(),
            fields,
        }
    }
}

pub const GENERIC_ERROR: &str = "Failed to process your request";

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message, fields } => {
                tracing::debug!("Rejected request: {} {:?}", message, fields);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: message,
                        fields,
                    }),
                )
                    .into_response()
            }
            Self::Internal(err) => {
                // Always log the error
                tracing::error!("{}. Root cause: {}", err, err.root_cause());

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: GENERIC_ERROR.to_string(),
                        fields: Vec::new(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod contact {
    pub use crate::api::routes::contact::public::*;
}
