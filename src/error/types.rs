/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP API. Every handler
 * and middleware failure is expressed as an `ApiError` variant, which maps
 * to exactly one HTTP status code.
 *
 * # Taxonomy
 *
 * - `Validation` - missing or malformed input (400)
 * - `Conflict` - duplicate unique field (409)
 * - `Unauthenticated` - no bearer token supplied (401)
 * - `InvalidToken` - token supplied but malformed, tampered, or expired (401)
 * - `InvalidLogin` - wrong username or password, deliberately uniform (401)
 * - `Forbidden` - authenticated but role not permitted (403)
 * - `Internal` - store or hashing failure (500)
 *
 * # Information Leakage
 *
 * `InvalidLogin` carries the same message for "unknown user" and "wrong
 * password" so a caller cannot probe which usernames exist. `Internal`
 * never echoes the underlying cause; details go to the logs only.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API-level error returned by handlers and middleware
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input
    #[error("{0}")]
    Validation(String),

    /// Duplicate value for a unique field (username or email)
    #[error("{0}")]
    Conflict(String),

    /// No bearer token was supplied with the request
    #[error("unauthenticated")]
    Unauthenticated,

    /// A token was supplied but failed verification (bad signature or expired)
    #[error("invalid credentials")]
    InvalidToken,

    /// Login failed; message is identical for unknown user and wrong password
    #[error("invalid username or password")]
    InvalidLogin,

    /// Authenticated, but the role is not in the route's allowed set
    #[error("forbidden")]
    Forbidden,

    /// Store or hashing failure; cause is logged, never returned
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidLogin => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
