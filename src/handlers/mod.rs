//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, shared state)
//! 2. Performs the credential check or a storage query
//! 3. Returns HTTP response (JSON, status code)

/// Login endpoint
pub mod auth;
/// Quote endpoints
pub mod quotes;
