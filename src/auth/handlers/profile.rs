/**
 * Profile Handler
 *
 * Implements GET /profile: returns the caller's verified identity straight
 * from the token claims attached by the auth gate. No database round-trip;
 * the token is the source of truth for subject and role.
 */

use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::roles::Role;
use crate::middleware::CurrentUser;

/// The authenticated identity as seen by the gate
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfileResponse {
    pub subject_id: Uuid,
    pub role: Role,
}

/// Profile handler; requires a valid bearer token
pub async fn profile(CurrentUser(context): CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        subject_id: context.subject_id,
        role: context.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthContext;

    #[tokio::test]
    async fn test_profile_echoes_token_identity() {
        let subject_id = Uuid::new_v4();
        let context = AuthContext {
            subject_id,
            role: Role::OrganizationMember,
        };

        let Json(response) = profile(CurrentUser(context)).await;
        assert_eq!(response.subject_id, subject_id);
        assert_eq!(response.role, Role::OrganizationMember);
    }
}
