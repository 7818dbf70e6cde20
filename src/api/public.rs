//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::ai::chat::UNEXPECTED_FAILURE_MESSAGE;

// Errors

pub struct ApiError(anyhow::Error);

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.0);

        // Details stay in the log, the client gets a generic message
        (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_FAILURE_MESSAGE).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod logs {
    pub use crate::api::routes::logs::public::*;
}
