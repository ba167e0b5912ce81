//! Login request and response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /login`.
///
/// ```json
/// { "password": "..." }
/// ```
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Response body for a successful login.
///
/// The token is the same for every caller and never expires.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
