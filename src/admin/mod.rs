//! Admin Module
//!
//! Handlers for the role-gated views and the administrator-only user
//! management endpoints. Role requirements are declared in the router; the
//! handlers themselves assume the gate has already run.

/// Role-gated HTTP handlers
pub mod handlers;

pub use handlers::{admin_dashboard, company_data, create_user, list_users};
