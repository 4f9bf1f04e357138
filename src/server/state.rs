/**
 * Application State
 *
 * The central state container injected into handlers and middleware at
 * startup. Both fields are process-scoped, immutably-configured singletons:
 * the connection pool to the credential store and the token signing keys.
 * Neither is reinitialized during the process lifetime, and no other state
 * is shared across requests.
 *
 * `FromRef` implementations let handlers extract just the part they need
 * (e.g. `State<PgPool>`) instead of the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::tokens::TokenSigner;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (credential store)
    pub db_pool: PgPool,

    /// Token signing/verification keys, built once from the configured
    /// secret
    pub token_signer: TokenSigner,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenSigner {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_signer.clone()
    }
}
