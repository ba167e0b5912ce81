//! HTTP middleware components.
//!
//! Middleware run before route handlers and can short-circuit a request,
//! which is how protected routes reject callers without a valid token.

/// Shared-token authentication middleware
pub mod auth;
