//! Credential token claim decoding.
//!
//! The client never verifies signatures; the server stays the authority on
//! authorization. It only reads the payload segment to learn when the token
//! expires, so a stale session can be dropped before a request is made.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims the client reads from a token payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    /// Expiry instant in Unix seconds.
    pub exp: f64,
    /// Subject user id, when the issuer includes one.
    #[serde(default)]
    pub id: Option<String>,
}

impl TokenClaims {
    /// A token whose expiry is strictly before `now_secs` is expired.
    pub fn is_expired(&self, now_secs: f64) -> bool {
        self.exp < now_secs
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not a claims object: {0}")]
    Claims(String),
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// # Errors
///
/// Returns [`TokenError`] when the token is not three segments, the payload is
/// not base64url, or the payload lacks a numeric `exp` claim.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }
    // Issuers differ on whether they keep `=` padding.
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}
