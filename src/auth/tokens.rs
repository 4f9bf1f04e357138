/**
 * Bearer Token Issuing and Verification
 *
 * This module handles the signed, time-limited bearer tokens that carry
 * caller identity and role between requests. Tokens are stateless JWTs
 * signed with a shared HMAC secret (HS256); nothing is persisted and the
 * only invalidation is expiry.
 *
 * # Lifetime
 *
 * Tokens expire exactly one hour after issuance. Verification grants no
 * clock-skew leeway: a token is rejected the instant its expiry passes.
 *
 * # Errors
 *
 * Verification distinguishes an expired token from a malformed or tampered
 * one (`TokenError::Expired` vs `TokenError::Invalid`) so callers can log
 * the difference, even where both surface as the same HTTP response.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::roles::Role;

/// Fixed token lifetime: one hour from issuance
pub const TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's ID
    pub sub: String,
    /// Role at issuance time
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token verification errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry instant has passed
    #[error("token expired")]
    Expired,

    /// The token is malformed or its signature does not verify
    #[error("invalid token")]
    Invalid,
}

/// Issues and verifies bearer tokens with a shared secret
///
/// Built once at startup from the configured signing secret and shared
/// immutably across requests via the application state.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenSigner {
    /// Create a signer from the shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a subject and role
    ///
    /// The token embeds subject ID, role, issued-at, and an expiry one hour
    /// out.
    pub fn issue(&self, subject: Uuid, role: Role) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token's signature and expiry, returning its claims
    ///
    /// # Errors
    ///
    /// `TokenError::Expired` if the expiry instant has passed (no leeway),
    /// `TokenError::Invalid` for anything else.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // No clock-skew tolerance
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signer() -> TokenSigner {
        TokenSigner::new("test-secret-key-12345")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let signer = test_signer();
        let subject = Uuid::new_v4();

        let token = signer.issue(subject, Role::Administrator).unwrap();
        assert!(!token.is_empty());

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, subject.to_string());
        assert_eq!(claims.role, Role::Administrator);
        assert_eq!(claims.exp, claims.iat + TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_tampered_signature_is_invalid() {
        let signer = test_signer();
        let token = signer.issue(Uuid::new_v4(), Role::Individual).unwrap();

        // Flip the last signature character
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(signer.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token_is_distinct_from_invalid() {
        let signer = test_signer();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Hand-craft a token whose expiry is already in the past
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            role: Role::Individual,
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret-key-12345".as_bytes()),
        )
        .unwrap();

        assert_eq!(signer.verify(&expired), Err(TokenError::Expired));
        assert_eq!(signer.verify("not.a.token"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_different_secret_rejected() {
        let token = test_signer().issue(Uuid::new_v4(), Role::Individual).unwrap();
        let other = TokenSigner::new("another-secret");
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }
}
