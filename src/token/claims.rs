//! JWT claims for access tokens.
//! Used by: token::sign, token::verify, handlers::token.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: String, ttl_seconds: i64) -> Self {
        Self {
            sub,
            exp: (Utc::now() + chrono::Duration::seconds(ttl_seconds)).timestamp(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
