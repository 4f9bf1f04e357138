//! Authentication Module
//!
//! User accounts, password hashing, bearer tokens, and the handlers for the
//! public authentication endpoints. The route-level gate that consumes the
//! tokens lives in [`crate::middleware`].
//!
//! # Architecture
//!
//! - **`roles`** - the closed role enumeration and its single
//!   validation/default function
//! - **`password`** - salted one-way hashing and verification (bcrypt)
//! - **`tokens`** - signed, time-limited bearer tokens (JWT/HS256)
//! - **`users`** - user record and parameterized store queries
//! - **`handlers`** - register, login, and profile HTTP handlers
//!
//! # Authentication Flow
//!
//! 1. **Register**: fields validated → password hashed → record inserted
//!    with a default-safe role → public fields returned
//! 2. **Login**: credentials verified → one-hour token issued carrying
//!    subject ID and role
//! 3. **Gated request**: token verified by the middleware → identity
//!    attached to the request → role checked against the route's allowed set
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed (fixed cost) before storage and never
//!   serialized back out
//! - Tokens are stateless, expire after one hour, and are invalidated only
//!   by expiry
//! - Login failures use one uniform message for unknown user and wrong
//!   password

/// Role enumeration and validation
pub mod roles;

/// Password hashing and verification
pub mod password;

/// Bearer token issuing and verification
pub mod tokens;

/// User model and store operations
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, profile, register};
pub use roles::Role;
pub use tokens::{Claims, TokenError, TokenSigner};
pub use users::User;
