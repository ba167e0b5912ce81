//! Shared-token authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Read the token from the Authorization header
//! 2. Compare it with the expected token
//! 3. Reject missing or mismatched tokens with HTTP 401

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, services::credentials::CredentialService};

/// Token authentication middleware function.
///
/// # Headers
///
/// The header carries the token returned by `POST /login` as-is, with no
/// scheme prefix:
/// ```text
/// Authorization: ef797c8118f02dfb...
/// ```
///
/// # Returns
///
/// - `Ok(Response)` if the token matches (calls next handler)
/// - `Err(AppError::Unauthorized)` otherwise; an absent or non-UTF-8
///   header is treated as an empty token
pub async fn auth_middleware(
    State(credentials): State<Arc<CredentialService>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    if !credentials.verify_request_token(token) {
        tracing::debug!(path = %request.uri().path(), "rejected request with invalid token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
