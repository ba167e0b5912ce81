//! Shared-secret credential service.
//!
//! The whole service is gated by one configured password. At startup the
//! password is hashed once into the *expected token*; logging in with the
//! same password hands that token back, and every protected request must
//! present it verbatim in the `Authorization` header.
//!
//! There is no session store, no expiry and no per-user distinction.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Secret used when `PASSWORD` is not configured.
///
/// Deployments are expected to override it; startup logs a warning when
/// this fallback is in effect.
pub const DEFAULT_SECRET: &str = "12345678";

/// Hash a secret into its token form: lowercase hex SHA-256.
pub fn derive_token(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());

    hex::encode(hasher.finalize())
}

/// Holds the expected token for the lifetime of the process.
///
/// Read-only after construction, so it is shared between request handlers
/// behind an `Arc` without further synchronization.
#[derive(Debug, Clone)]
pub struct CredentialService {
    expected_token: String,
}

impl CredentialService {
    /// Derive and retain the expected token for `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            expected_token: derive_token(secret),
        }
    }

    /// Build from the configured secret, falling back to [`DEFAULT_SECRET`]
    /// when it is absent or empty.
    pub fn from_config(secret: Option<&str>) -> Self {
        match secret.filter(|s| !s.is_empty()) {
            Some(secret) => Self::new(secret),
            None => {
                tracing::warn!(
                    "PASSWORD is not set, falling back to the default shared secret; \
                     set PASSWORD before exposing this service"
                );
                Self::new(DEFAULT_SECRET)
            }
        }
    }

    /// The bearer token returned by a successful login.
    pub fn expected_token(&self) -> &str {
        &self.expected_token
    }

    /// Check a submitted login password.
    ///
    /// An empty password never matches.
    pub fn verify_login(&self, password: &str) -> bool {
        if password.is_empty() {
            return false;
        }
        self.matches(&derive_token(password))
    }

    /// Check the token presented on a protected request.
    ///
    /// An empty token never matches.
    pub fn verify_request_token(&self, token: &str) -> bool {
        !token.is_empty() && self.matches(token)
    }

    fn matches(&self, candidate: &str) -> bool {
        bool::from(candidate.as_bytes().ct_eq(self.expected_token.as_bytes()))
    }
}
