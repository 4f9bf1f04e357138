//! BizGate - Main Library
//!
//! BizGate is a minimal HTTP backend exposing user registration,
//! authentication, and role-gated endpoints backed by a PostgreSQL users
//! table. Its core is the authentication and authorization gate: bcrypt
//! password hashing, HMAC-signed bearer tokens, and role-based route
//! gating.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, initialization, shared state
//! - **`routes`** - route table and gate layering
//! - **`auth`** - roles, password hashing, tokens, user store, public
//!   auth handlers
//! - **`admin`** - role-gated views and user management
//! - **`middleware`** - the authenticate/authorize gate
//! - **`error`** - API error taxonomy and response mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use bizgate::server::{create_app, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: roles, passwords, tokens, users, handlers
pub mod auth;

/// Role-gated views and user management
pub mod admin;

/// Request middleware (auth gate)
pub mod middleware;

/// API error types
pub mod error;
