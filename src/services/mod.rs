//! Business logic services.
//!
//! Services hold the credential check and the storage queries, separated
//! from the HTTP handlers that call them.

pub mod credentials;
pub mod quote_service;
