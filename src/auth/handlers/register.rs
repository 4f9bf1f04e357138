/**
 * Registration Handler
 *
 * Implements user registration for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate required fields and email shape
 * 2. Check username and email uniqueness against the store
 * 3. Hash the password (bcrypt, fixed cost)
 * 4. Resolve the role (absent/unrecognized → lowest privilege)
 * 5. Insert the record and return public fields only
 *
 * # Concurrency
 *
 * The uniqueness pre-checks give friendly, field-specific 409 messages, but
 * they are advisory: two concurrent registrations with the same username can
 * both pass them. The table's unique constraints then let exactly one insert
 * succeed; the loser's unique violation also maps to 409.
 *
 * # Security
 *
 * - Passwords are hashed before storage and never returned
 * - Registration does not issue a token; the caller logs in separately
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{validate_new_user, RegisterRequest, UserResponse};
use crate::auth::password::hash_password;
use crate::auth::roles::Role;
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username, User};
use crate::error::ApiError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or malformed email
/// * `409 Conflict` - username or email already in use
/// * `500 Internal Server Error` - store or hashing failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    let user = create_account(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user))))
}

/// Validate, hash, and insert a new user
///
/// Shared by public registration and the admin user-creation endpoint so
/// the two call sites cannot drift apart in validation or role defaulting.
pub(crate) async fn create_account(
    pool: &PgPool,
    request: RegisterRequest,
) -> Result<User, ApiError> {
    validate_new_user(&request)?;

    if get_user_by_username(pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::conflict("username already taken"));
    }
    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(ApiError::conflict("email already registered"));
    }

    let password_hash = hash_password(&request.password)?;
    let role = Role::parse_or_default(request.role.as_deref());

    let user = create_user(pool, request.username, request.email, password_hash, role).await?;

    tracing::info!("User created: {} ({})", user.username, user.role);

    Ok(user)
}
