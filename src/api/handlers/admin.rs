use crate::admin::{AdminAuthResponse, AdminConfig, ErrorResponse, Verdict};
use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Default)]
pub struct AdminLogin {
    #[serde(default)]
    password: String,
}

impl std::fmt::Debug for AdminLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLogin")
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/auth",
    request_body = AdminLogin,
    responses(
        (status = 200, description = "Password matches the administrator secret.", body = AdminAuthResponse),
        (status = 401, description = "Password does not match.", body = ErrorResponse),
        (status = 500, description = "Administrator secret is not configured.", body = ErrorResponse),
    ),
    tag = "admin"
)]
// Missing or malformed payloads are checked as an empty password.
#[instrument(skip_all)]
pub async fn admin_auth(
    admin: Extension<Arc<AdminConfig>>,
    payload: Result<Json<AdminLogin>, JsonRejection>,
) -> impl IntoResponse {
    let login = payload.map_or_else(
        |rejection| {
            debug!("Unreadable admin login payload: {rejection}");
            AdminLogin::default()
        },
        |Json(login)| login,
    );

    match admin.check(&login.password).and_then(Verdict::authorize) {
        Ok(()) => (StatusCode::OK, Json(AdminAuthResponse { success: true })).into_response(),
        Err(err) => err.into_response(),
    }
}
