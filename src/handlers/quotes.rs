//! Quote HTTP handlers.
//!
//! This module implements the quote endpoints, both behind the token
//! middleware:
//! - GET /quotes - List all quotes, newest first
//! - POST /quotes - Add a quote

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    db::DbPool,
    error::AppError,
    extract::ValidJson,
    models::quote::{CreateQuoteRequest, CreateQuoteResponse, QuoteResponse},
    services::quote_service,
};

/// List every quote.
///
/// # Endpoint
///
/// `GET /quotes`
///
/// # Response
///
/// - **Success (200 OK)**: Array of quotes (may be empty), newest first
/// - **Error (401)**: Missing or invalid token
///
/// ```json
/// [
///   {
///     "text": "Hello",
///     "person": "Alice",
///     "context": "",
///     "timestamp": "2025-12-20 10:00:00"
///   }
/// ]
/// ```
pub async fn list_quotes(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    // Held until the handler returns, on success or error
    let mut conn = pool.acquire().await?;

    let quotes = quote_service::list_quotes(&mut conn).await?;

    Ok(Json(quotes.into_iter().map(Into::into).collect()))
}

/// Add a quote.
///
/// # Endpoint
///
/// `POST /quotes`
///
/// # Request Body
///
/// ```json
/// {
///   "text": "Hello",
///   "person": "Alice",
///   "context": "optional"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"success": true}`
/// - **Error (401)**: Missing or invalid token
/// - **Error (422)**: Body missing, not JSON, or `text`/`person` missing or blank
/// - **Error (500)**: Database error
pub async fn create_quote(
    State(pool): State<DbPool>,
    ValidJson(request): ValidJson<CreateQuoteRequest>,
) -> Result<(StatusCode, Json<CreateQuoteResponse>), AppError> {
    let quote = request.validate().ok_or(AppError::UnprocessableEntity)?;

    let mut conn = pool.acquire().await?;
    let id = quote_service::insert_quote(&mut conn, &quote).await?;
    tracing::debug!(id, person = %quote.person, "quote added");

    Ok((StatusCode::CREATED, Json(CreateQuoteResponse { success: true })))
}
