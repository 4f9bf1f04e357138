/**
 * Authentication Handler Types
 *
 * Request and response types shared by the registration, login, and profile
 * handlers, plus the single validation function both user-creation call
 * sites (public register, admin create) go through.
 *
 * Request fields use `#[serde(default)]` so an absent field and an empty
 * field are the same thing: a 400 validation error from `validate_new_user`,
 * not a deserialization rejection.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::roles::Role;
use crate::auth::users::User;
use crate::error::ApiError;

/// Registration request
///
/// Also the body of the admin user-creation endpoint; the two routes share
/// one validation and creation path.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Desired username (unique)
    #[serde(default)]
    pub username: String,
    /// Email address (unique)
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage, never stored)
    #[serde(default)]
    pub password: String,
    /// Optional role; absent or unrecognized values default to the
    /// lowest-privilege role
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response: bearer token plus public user fields
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User response (public fields only, never the password hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Validate the fields of a user-creation request
///
/// Presence of username, email, and password, and a basic shape check on
/// the email. Role values are not validated here; [`Role::parse_or_default`]
/// resolves them during creation.
pub fn validate_new_user(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation(
            "username, email and password are required",
        ));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("invalid email format"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "giorgi".to_string(),
            email: "giorgi@example.com".to_string(),
            password: "password123".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_new_user(&valid_request()).is_ok());
    }

    #[test]
    fn test_missing_fields_rejected() {
        for field in ["username", "email", "password"] {
            let mut request = valid_request();
            match field {
                "username" => request.username.clear(),
                "email" => request.email.clear(),
                _ => request.password.clear(),
            }
            let err = validate_new_user(&request).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        // An empty JSON object must deserialize (and then fail validation
        // with 400) rather than be rejected by the extractor
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(validate_new_user(&request).is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let err = validate_new_user(&request).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_response_has_no_hash() {
        let json = serde_json::to_value(UserResponse {
            id: "x".to_string(),
            username: "giorgi".to_string(),
            email: "giorgi@example.com".to_string(),
            role: Role::Individual,
            created_at: Utc::now(),
        })
        .unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }
}
