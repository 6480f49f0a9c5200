//! HMAC-SHA256 token verification.
//! Used by: handlers::protected.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::error::{Error, Result};
use crate::token::claims::Claims;

/// Signature check happens before any claim is trusted; the comparison is
/// constant-time inside jsonwebtoken. Zero leeway: a token is rejected the
/// instant its `exp` passes.
pub fn verify_token(token: &str, key: &DecodingKey) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, key, &validation).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        ErrorKind::InvalidSignature => Error::InvalidSignature,
        _ => Error::InvalidToken(e.to_string()),
    })?;

    Ok(data.claims)
}
