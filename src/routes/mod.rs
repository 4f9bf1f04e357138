//! Routes Module
//!
//! Route table assembly. The router wires public endpoints, the auth gate,
//! and the role-gated endpoints into a single Axum router.

/// Router assembly
pub mod router;

pub use router::create_router;
