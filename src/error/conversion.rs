/**
 * Error Conversion
 *
 * This module converts `ApiError` into HTTP responses and centralizes the
 * mapping of lower-level failures (database, hashing, token verification)
 * into the API taxonomy.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::auth::password::PasswordError;
use crate::auth::tokens::TokenError;
use crate::auth::users::is_unique_violation;
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into a JSON HTTP response
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    /// Map a database error to the API taxonomy
    ///
    /// A unique-constraint violation is the store resolving a registration
    /// race (the pre-insert checks passed concurrently for two requests) and
    /// maps to 409. Everything else is an internal error.
    fn from(err: sqlx::Error) -> Self {
        if is_unique_violation(&err) {
            tracing::warn!("Unique constraint violation: {:?}", err);
            return ApiError::conflict("username or email already exists");
        }
        tracing::error!("Database error: {:?}", err);
        ApiError::Internal
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::EmptyPassword => ApiError::validation("password is required"),
            PasswordError::Hash(e) => {
                tracing::error!("Password hashing failed: {:?}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<TokenError> for ApiError {
    /// Map token verification failures to 401
    ///
    /// Expired and malformed tokens are distinct internally (and logged as
    /// such) but deliberately collapse to the same external response.
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => tracing::warn!("Rejected expired token"),
            TokenError::Invalid => tracing::warn!("Rejected invalid token"),
        }
        ApiError::InvalidToken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_into_response_status() {
        let response = ApiError::validation("bad input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_token_errors_collapse_to_invalid_credentials() {
        let expired: ApiError = TokenError::Expired.into();
        let invalid: ApiError = TokenError::Invalid.into();
        assert_eq!(expired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(expired.to_string(), invalid.to_string());
    }

    #[test]
    fn test_database_error_maps_to_internal() {
        let err: ApiError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_empty_password_maps_to_validation() {
        let err: ApiError = PasswordError::EmptyPassword.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
