//! Process configuration loaded once at startup.
//! Used by: main, state.

use crate::error::{Error, Result};

pub const SECRET_ENV: &str = "SECRET_KEY";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 300;

pub struct Config {
    pub secret: String,
    pub bind_addr: String,
    pub token_ttl_seconds: i64,
}

impl Config {
    pub fn new(secret: String, bind_addr: String, token_ttl_seconds: i64) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::EmptySecret);
        }
        Ok(Self { secret, bind_addr, token_ttl_seconds })
    }

    /// Fails if the signing secret is absent: the process must not start
    /// serving requests without one.
    pub fn from_env() -> Result<Self> {
        let secret =
            std::env::var(SECRET_ENV).map_err(|_| Error::MissingSecret(SECRET_ENV.into()))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        Self::new(secret, bind_addr, DEFAULT_TOKEN_TTL_SECONDS)
    }
}
