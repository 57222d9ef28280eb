//! # Storefront Admin
//!
//! `storefront-admin` is the only server-side piece of the storefront: it decides
//! whether a submitted password grants access to the administrator area.
//!
//! ## Administrator secret
//!
//! The secret is read once at startup (`--admin-password` or
//! `STOREFRONT_ADMIN_PASSWORD`) and injected into the router as an
//! [`admin::AdminConfig`]. A missing or empty secret does not stop the service;
//! every check then answers `500 Server configuration error` so the
//! misconfiguration is visible without leaking anything to callers.
//!
//! ## Verdicts
//!
//! | Condition | Status | Body |
//! |---|---|---|
//! | Secret configured and matches | 200 | `{"success":true}` |
//! | Secret configured and does not match | 401 | `{"error":"Invalid password"}` |
//! | Secret not configured | 500 | `{"error":"Server configuration error"}` |
//!
//! The secret never appears in a response body or a log line.

pub mod admin;
pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
