//! API Error Module
//!
//! Defines the error taxonomy used across handlers and middleware, plus the
//! conversions that turn lower-level failures (database, hashing, tokens)
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - ApiError taxonomy
//! └── conversion.rs   - IntoResponse + From impls
//! ```

/// Error taxonomy
pub mod types;

/// HTTP response and From conversions
pub mod conversion;

pub use types::ApiError;
