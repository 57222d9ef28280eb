//! Administrator password check.
//!
//! Flow Overview:
//! 1) The secret is loaded once at startup into an [`AdminConfig`].
//! 2) Each request calls [`AdminConfig::check`] with the submitted value.
//! 3) A missing secret fails before any comparison happens.
//!
//! Security boundaries:
//! - The secret is never logged, echoed, or formatted through `Debug`.
//! - Comparison runs over SHA-256 digests in constant time.

mod error;

pub use self::error::{AdminAuthError, AdminAuthResponse, ErrorResponse};

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::{debug, error};

/// Outcome of a check against a configured secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Authorized,
    Unauthorized,
}

impl Verdict {
    /// Map the verdict into the error taxonomy used by handlers.
    ///
    /// # Errors
    /// Returns `AdminAuthError::Denied` for `Verdict::Unauthorized`.
    pub const fn authorize(self) -> Result<(), AdminAuthError> {
        match self {
            Self::Authorized => Ok(()),
            Self::Unauthorized => Err(AdminAuthError::Denied),
        }
    }
}

/// The administrator secret. Empty values are treated as unset.
#[derive(Clone, Default)]
pub struct AdminSecret(Option<SecretString>);

impl AdminSecret {
    #[must_use]
    pub fn new(value: Option<String>) -> Self {
        Self(
            value
                .filter(|value| !value.is_empty())
                .map(SecretString::from),
        )
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    fn expose(&self) -> Option<&str> {
        self.0.as_ref().map(ExposeSecret::expose_secret)
    }
}

impl std::fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = if self.is_configured() { "***" } else { "unset" };
        f.debug_tuple("AdminSecret").field(&state).finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AdminConfig {
    secret: AdminSecret,
}

impl AdminConfig {
    #[must_use]
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: AdminSecret::new(secret),
        }
    }

    #[must_use]
    pub fn with_secret(mut self, secret: AdminSecret) -> Self {
        self.secret = secret;
        self
    }

    #[must_use]
    pub fn secret(&self) -> &AdminSecret {
        &self.secret
    }

    /// Compare a submitted password with the configured secret.
    ///
    /// # Errors
    /// Returns `AdminAuthError::ServerConfiguration` when no secret is configured,
    /// regardless of what was submitted.
    pub fn check(&self, submitted: &str) -> Result<Verdict, AdminAuthError> {
        let Some(expected) = self.secret.expose() else {
            error!("Admin secret is not configured, set STOREFRONT_ADMIN_PASSWORD");
            return Err(AdminAuthError::ServerConfiguration);
        };

        let verdict = if secrets_match(submitted, expected) {
            Verdict::Authorized
        } else {
            Verdict::Unauthorized
        };

        debug!(?verdict, "Admin password checked");

        Ok(verdict)
    }
}

// Digests keep the comparison independent of the input lengths.
fn secrets_match(submitted: &str, expected: &str) -> bool {
    let submitted = Sha256::digest(submitted.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    submitted.as_slice().ct_eq(expected.as_slice()).into()
}
