//! Data models representing database entities and API payloads.

/// Login payloads
pub mod auth;
/// Stored quotes and their request/response types
pub mod quote;
