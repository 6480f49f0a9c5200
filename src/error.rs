//! Unified error types for the secure API.
//! Used by: config, token, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Detail string shared by every 401 response. The distinct verification
/// failures must not be distinguishable by the caller.
pub const UNAUTHORIZED_DETAIL: &str = "Token inválido o expirado";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingSecret(String),

    #[error("signing secret must not be empty")]
    EmptySecret,

    #[error("missing bearer token")]
    MissingToken,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid token format: {0}")]
    InvalidToken(String),

    #[error("token encoding error: {0}")]
    Encoding(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Error::MissingToken
            | Error::TokenExpired
            | Error::InvalidSignature
            | Error::InvalidToken(_) => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_DETAIL.into()),
            Error::MissingSecret(_) | Error::EmptySecret | Error::Encoding(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn token_expired_returns_401() {
        let response = Error::TokenExpired.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_signature_returns_401() {
        let response = Error::InvalidSignature.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_token_returns_401() {
        let response = Error::InvalidToken("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn missing_token_returns_401() {
        let response = Error::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn encoding_error_returns_500() {
        let response = Error::Encoding("key failure".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unauthorized_bodies_are_identical() {
        let expired = body_of(Error::TokenExpired.into_response()).await;
        let tampered = body_of(Error::InvalidSignature.into_response()).await;
        let malformed = body_of(Error::InvalidToken("two segments".into()).into_response()).await;
        let missing = body_of(Error::MissingToken.into_response()).await;
        assert_eq!(expired, tampered);
        assert_eq!(expired, malformed);
        assert_eq!(expired, missing);
        assert!(expired.contains(UNAUTHORIZED_DETAIL));
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(Error::TokenExpired.to_string(), "token expired");
        assert_eq!(Error::InvalidSignature.to_string(), "invalid signature");
        assert_eq!(
            Error::MissingSecret("SECRET_KEY".into()).to_string(),
            "environment variable SECRET_KEY is not set"
        );
    }
}
