/**
 * Server Initialization
 *
 * Builds the application from its configuration: connects the database
 * pool, ensures the users table exists, constructs the token signer, and
 * assembles the router.
 *
 * # Initialization Steps
 *
 * 1. Connect the PostgreSQL pool (fatal on failure; every endpoint except
 *    the greeting depends on the store)
 * 2. Create the users table if it does not exist
 * 3. Build the `TokenSigner` from the configured secret
 * 4. Create the router with the shared state
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::tokens::TokenSigner;
use crate::auth::users::ensure_users_table;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` if the database is unreachable or
/// the users table cannot be created.
pub async fn create_app(config: &Config) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing backend server");

    tracing::info!("Connecting to database...");
    let db_pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Connected to PostgreSQL database!");

    ensure_users_table(&db_pool).await?;
    tracing::info!("Users table ready");

    let token_signer = TokenSigner::new(&config.jwt_secret);

    let app_state = AppState {
        db_pool,
        token_signer,
    };

    Ok(create_router(app_state))
}
