//! HMAC-SHA256 token signing.
//! Used by: handlers::token.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::error::{Error, Result};
use crate::token::claims::Claims;

pub fn sign_token(claims: &Claims, key: &EncodingKey) -> Result<String> {
    encode(&Header::new(Algorithm::HS256), claims, key)
        .map_err(|e| Error::Encoding(e.to_string()))
}
