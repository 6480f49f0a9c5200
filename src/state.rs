//! Shared application state.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::config::Config;

pub struct AppStateInner {
    pub encoding_key: EncodingKey,
    pub decoding_key: DecodingKey,
    pub token_ttl_seconds: i64,
}

pub type AppState = Arc<AppStateInner>;

/// Derives the signing and verification keys from the secret once; the raw
/// secret is not retained past this point.
pub fn build_state(config: &Config) -> AppState {
    Arc::new(AppStateInner {
        encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
        decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
        token_ttl_seconds: config.token_ttl_seconds,
    })
}

#[cfg(test)]
pub fn build_test_state(secret: &str, token_ttl_seconds: i64) -> AppState {
    Arc::new(AppStateInner {
        encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        token_ttl_seconds,
    })
}
