//! Bearer-protected endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::verify::verify_token;

#[derive(Serialize)]
pub struct ProtectedResponse {
    pub message: &'static str,
    pub user: String,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(Error::MissingToken)
}

pub async fn protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProtectedResponse>> {
    let token = bearer_token(&headers)?;
    let claims = verify_token(token, &state.decoding_key)?;
    tracing::debug!(sub = %claims.sub, "access granted");
    Ok(Json(ProtectedResponse { message: "Acceso permitido", user: claims.sub }))
}
