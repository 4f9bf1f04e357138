//! Authentication Handlers Module
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types, shared validation
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Authenticated identity handler
//! ```

/// Request/response types and shared validation
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Authenticated identity handler
pub mod profile;

pub use login::login;
pub use profile::{profile, ProfileResponse};
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
