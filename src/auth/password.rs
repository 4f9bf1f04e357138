/**
 * Password Hashing
 *
 * One-way, salted password hashing and verification, wrapping bcrypt.
 *
 * # Security
 *
 * - The cost factor is fixed at 10 rounds, balancing brute-force resistance
 *   against login latency.
 * - The salt is generated per hash and embedded in the digest by bcrypt.
 * - A hashing failure is an error; there is no plaintext fallback path.
 * - Verification is constant-time (via bcrypt).
 */

use thiserror::Error;

/// Fixed bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The plaintext was empty; refusing to hash
    #[error("password must not be empty")]
    EmptyPassword,

    /// bcrypt failed (e.g. resource exhaustion)
    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password into a salted bcrypt digest
///
/// # Errors
///
/// Returns `PasswordError::EmptyPassword` for an empty plaintext and
/// `PasswordError::Hash` if bcrypt itself fails.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    if plaintext.is_empty() {
        return Err(PasswordError::EmptyPassword);
    }
    Ok(bcrypt::hash(plaintext, HASH_COST)?)
}

/// Verify a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
    Ok(bcrypt::verify(plaintext, digest)?)
}
