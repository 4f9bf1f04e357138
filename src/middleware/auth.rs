/**
 * Authentication and Authorization Middleware
 *
 * The auth gate is a pair of composable request checks applied in front of
 * protected handlers:
 *
 * 1. `authenticate` - requires a `Bearer <token>` Authorization header,
 *    verifies it, and attaches the verified identity to the request
 *    extensions. A missing header is "unauthenticated" (401); a present but
 *    invalid or expired token is "invalid credentials" (401).
 * 2. `authorize` - requires the attached role to be a member of the route's
 *    allowed set, otherwise "forbidden" (403). It runs after `authenticate`;
 *    if the authentication context is absent it rejects rather than panics.
 *
 * Per request the progression is strictly linear: unauthenticated →
 * authenticated → authorized → handler. There are no retries and no state
 * shared across requests beyond the read-only signing keys.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::roles::Role;
use crate::auth::tokens::TokenSigner;
use crate::error::ApiError;

/// Verified identity attached to the request by `authenticate`
#[derive(Clone, Debug)]
pub struct AuthContext {
    /// Subject ID from the token
    pub subject_id: Uuid,
    /// Role from the token
    pub role: Role,
}

/// Authentication middleware
///
/// Extracts and verifies the bearer token, then attaches an [`AuthContext`]
/// to the request extensions for downstream use.
pub async fn authenticate(
    State(signer): State<TokenSigner>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header is not a bearer token");
        ApiError::Unauthenticated
    })?;

    let claims = signer.verify(token)?;

    let subject_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid subject ID in token: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthContext {
        subject_id,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Authorization middleware
///
/// Checks that the authenticated role is a member of `allowed`. Must run
/// after [`authenticate`]; an absent context is treated as forbidden.
pub async fn authorize(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = request.extensions().get::<AuthContext>().ok_or_else(|| {
        tracing::warn!("Authorization check reached without authentication context");
        ApiError::Forbidden
    })?;

    if !allowed.contains(&context.role) {
        tracing::warn!("Role {} not permitted for this route", context.role);
        return Err(ApiError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Extractor for the authenticated identity
///
/// Use as a handler parameter on routes behind [`authenticate`] to read the
/// verified subject and role.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::warn!("AuthContext not found in request extensions");
                ApiError::Unauthenticated
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_user_extraction() {
        let mut request = axum::http::Request::builder()
            .uri("http://example.com/profile")
            .body(())
            .unwrap();

        let context = AuthContext {
            subject_id: Uuid::new_v4(),
            role: Role::EventManager,
        };
        request.extensions_mut().insert(context.clone());

        let (mut parts, _) = request.into_parts();
        let extracted = CurrentUser::from_request_parts(&mut parts, &()).await;

        let CurrentUser(user) = extracted.unwrap();
        assert_eq!(user.subject_id, context.subject_id);
        assert_eq!(user.role, Role::EventManager);
    }

    #[tokio::test]
    async fn test_current_user_missing_context() {
        let request = axum::http::Request::builder()
            .uri("http://example.com/profile")
            .body(())
            .unwrap();

        let (mut parts, _) = request.into_parts();
        let extracted = CurrentUser::from_request_parts(&mut parts, &()).await;

        assert!(matches!(extracted, Err(ApiError::Unauthenticated)));
    }
}
