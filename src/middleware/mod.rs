//! Middleware Module
//!
//! Request-processing middleware. Currently this is the auth gate: the
//! `authenticate` / `authorize` pair and the `CurrentUser` extractor.

/// Authentication and authorization gate
pub mod auth;

pub use auth::{authenticate, authorize, AuthContext, CurrentUser};
