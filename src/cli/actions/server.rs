use crate::{admin::AdminConfig, api};
use anyhow::Result;
use axum::http::HeaderValue;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub admin: AdminConfig,
    pub frontend_origin: Option<HeaderValue>,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    api::new(args.port, args.admin, args.frontend_origin).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        (
            "admin_secret_set",
            args.admin.secret().is_configured().to_string(),
        ),
        (
            "frontend_origin",
            args.frontend_origin
                .as_ref()
                .and_then(|origin| origin.to_str().ok())
                .unwrap_or("n/a")
                .to_string(),
        ),
    ];

    for (key, value) in entries {
        info!("{key}: {value}");
    }
}
