/**
 * Role-Gated View and User-Management Handlers
 *
 * Handlers for the routes behind the auth gate's authorization check:
 *
 * - `GET /admin-dashboard` - administrator only
 * - `GET /company-data` - administrator or organization-member
 * - `GET /users` - administrator only
 * - `POST /users` - administrator only
 *
 * Role enforcement happens in the router's middleware stack, not here; by
 * the time a handler runs, authentication and authorization have passed.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::handlers::register::create_account;
use crate::auth::handlers::{ProfileResponse, RegisterRequest, UserResponse};
use crate::auth::roles::Role;
use crate::auth::users;
use crate::error::ApiError;
use crate::middleware::CurrentUser;

/// Admin dashboard payload
#[derive(Serialize, Deserialize, Debug)]
pub struct DashboardResponse {
    pub message: String,
    pub user: ProfileResponse,
}

/// Company data payload
#[derive(Serialize, Deserialize, Debug)]
pub struct CompanyDataResponse {
    pub message: String,
    pub accessed_as: Role,
}

/// Admin dashboard; administrator only
pub async fn admin_dashboard(CurrentUser(context): CurrentUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome to the admin dashboard".to_string(),
        user: ProfileResponse {
            subject_id: context.subject_id,
            role: context.role,
        },
    })
}

/// Company data; administrators and organization members
pub async fn company_data(CurrentUser(context): CurrentUser) -> Json<CompanyDataResponse> {
    Json(CompanyDataResponse {
        message: "Internal company data".to_string(),
        accessed_as: context.role,
    })
}

/// List all users; administrator only
///
/// Returns public fields only; a store failure maps to 500.
pub async fn list_users(State(pool): State<PgPool>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let all = users::list_users(&pool).await?;
    Ok(Json(all.iter().map(UserResponse::from_user).collect()))
}

/// Create a user; administrator only
///
/// Same validation and role-defaulting path as public registration.
pub async fn create_user(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Admin user creation for username: {}", request.username);

    let user = create_account(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&user))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::middleware::AuthContext;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_dashboard_reflects_caller() {
        let context = AuthContext {
            subject_id: Uuid::new_v4(),
            role: Role::Administrator,
        };

        let Json(response) = admin_dashboard(CurrentUser(context.clone())).await;
        assert_eq!(response.user.subject_id, context.subject_id);
        assert_eq!(response.user.role, Role::Administrator);
    }

    #[tokio::test]
    async fn test_company_data_reports_role() {
        let context = AuthContext {
            subject_id: Uuid::new_v4(),
            role: Role::OrganizationMember,
        };

        let Json(response) = company_data(CurrentUser(context)).await;
        assert_eq!(response.accessed_as, Role::OrganizationMember);
    }
}
