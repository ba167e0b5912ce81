//! Login endpoint.
//!
//! - POST /login - Exchange the shared password for the bearer token

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    extract::ValidJson,
    models::auth::{LoginRequest, LoginResponse},
    services::credentials::CredentialService,
};

/// Exchange the shared password for the bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// { "password": "12345678" }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{"token": "<hex sha-256 of the password>"}`
/// - **Error (401)**: Wrong or empty password
/// - **Error (422)**: Body missing, not JSON, or without `password`
pub async fn login(
    State(credentials): State<Arc<CredentialService>>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !credentials.verify_login(&request.password) {
        tracing::info!("login rejected");
        return Err(AppError::InvalidCredentials);
    }

    Ok(Json(LoginResponse {
        token: credentials.expected_token().to_string(),
    }))
}
