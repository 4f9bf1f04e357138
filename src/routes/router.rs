/**
 * Router Configuration
 *
 * Assembles the application's route table and layers the auth gate in front
 * of the protected routes.
 *
 * # Route Order
 *
 * 1. Public routes: greeting, register, login
 * 2. Protected routes, each behind `authenticate` plus a per-route
 *    `authorize` check where a role set applies
 * 3. Fallback handler for unknown paths (404)
 *
 * # Gate Layering
 *
 * `authenticate` is applied as a route layer on the protected sub-router,
 * and `authorize` as a per-route layer, so each request passes
 * authentication before its role is checked. `/profile` needs any valid
 * token; the remaining protected routes also require role membership.
 */

use axum::{
    extract::Request,
    middleware::{from_fn, from_fn_with_state, Next},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::admin::{admin_dashboard, company_data, create_user, list_users};
use crate::auth::roles::Role;
use crate::auth::{login, profile, register};
use crate::middleware::{authenticate, authorize};
use crate::server::state::AppState;

/// Roles allowed on administrator-only routes
const ADMIN_ONLY: &[Role] = &[Role::Administrator];

/// Roles allowed on the company data route
const COMPANY_ROLES: &[Role] = &[Role::Administrator, Role::OrganizationMember];

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// | Method/Path | Gate |
/// |---|---|
/// | `GET /` | none |
/// | `POST /register` | none |
/// | `POST /login` | none |
/// | `GET /profile` | token |
/// | `GET /admin-dashboard` | token + administrator |
/// | `GET /company-data` | token + administrator or organization-member |
/// | `GET /users` | token + administrator |
/// | `POST /users` | token + administrator |
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/profile", get(profile))
        .route(
            "/admin-dashboard",
            get(admin_dashboard).layer(from_fn(|req: Request, next: Next| {
                authorize(ADMIN_ONLY, req, next)
            })),
        )
        .route(
            "/company-data",
            get(company_data).layer(from_fn(|req: Request, next: Next| {
                authorize(COMPANY_ROLES, req, next)
            })),
        )
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .layer(from_fn(|req: Request, next: Next| {
                    authorize(ADMIN_ONLY, req, next)
                })),
        )
        .route_layer(from_fn_with_state(app_state.clone(), authenticate));

    Router::new()
        .route("/", get(greeting))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
        .fallback(|| async { "404 Not Found" })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Public greeting for the root route
async fn greeting() -> &'static str {
    "Welcome to your business application backend!"
}
