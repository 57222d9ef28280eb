use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdminAuthError {
    /// No administrator secret is configured for this deployment.
    #[error("Server configuration error")]
    ServerConfiguration,
    /// The submitted password does not match.
    #[error("Invalid password")]
    Denied,
}

impl AdminAuthError {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::ServerConfiguration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Denied => StatusCode::UNAUTHORIZED,
        }
    }
}

#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AdminAuthResponse {
    pub success: bool,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
