/**
 * Login Handler
 *
 * Implements user authentication for POST /login.
 *
 * # Authentication Process
 *
 * 1. Validate required fields
 * 2. Look up the user by username
 * 3. Verify the password against the stored bcrypt digest
 * 4. Issue a one-hour bearer token carrying subject ID and role
 *
 * # Security Notes
 *
 * - Unknown user and wrong password return the identical 401 message, so a
 *   caller cannot learn whether an account exists
 * - Password verification is constant-time (via bcrypt)
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::password::verify_password;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing username or password
/// * `401 Unauthorized` - unknown user or wrong password (same message)
/// * `500 Internal Server Error` - store, hashing, or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("username and password are required"));
    }

    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown user: {}", request.username);
            ApiError::InvalidLogin
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", user.username);
        return Err(ApiError::InvalidLogin);
    }

    let token = state.token_signer.issue(user.id, user.role).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::Internal
    })?;

    tracing::info!("User logged in: {} ({})", user.username, user.role);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from_user(&user),
    }))
}
