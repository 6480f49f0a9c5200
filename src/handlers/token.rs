//! Token issuance endpoint (login simulation).
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;
use crate::token::claims::Claims;
use crate::token::sign::sign_token;

/// No real authentication happens here; every login issues a token for the
/// same demo identity.
const DEMO_SUBJECT: &str = "usuario123";

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(State(state): State<AppState>) -> Result<Json<TokenResponse>> {
    let claims = Claims::new(DEMO_SUBJECT.into(), state.token_ttl_seconds);
    let token = sign_token(&claims, &state.encoding_key)?;
    tracing::info!(sub = %claims.sub, exp = claims.exp, "token issued");
    Ok(Json(TokenResponse { access_token: token, token_type: "bearer" }))
}
