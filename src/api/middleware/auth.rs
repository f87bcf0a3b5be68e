//! API key authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::state::AppState;
use crate::error::AppError;

/// Extract bearer token from Authorization header.
fn extract_bearer_token(req: &Request<Body>) -> Option<&str> {
    let auth_header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
}

/// Compare two keys without short-circuiting on the first differing byte.
///
/// Only the length can be inferred from timing.
fn keys_match(presented: &[u8], expected: &[u8]) -> bool {
    presented.len() == expected.len()
        && presented
            .iter()
            .zip(expected)
            .fold(0u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}

/// Middleware that requires the configured API key, when one is set.
pub async fn require_key(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    if !state.config.auth.is_enabled() {
        return next.run(req).await;
    }

    let Some(token) = extract_bearer_token(&req) else {
        return AppError::Unauthorized.into_response();
    };

    if !keys_match(token.as_bytes(), state.config.auth.api_key.as_bytes()) {
        tracing::warn!(path = %req.uri().path(), "Rejected request with invalid API key");
        return AppError::InvalidToken.into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match() {
        assert!(keys_match(b"s3cret", b"s3cret"));
        assert!(!keys_match(b"s3creT", b"s3cret"));
        assert!(!keys_match(b"s3cre", b"s3cret"));
        assert!(!keys_match(b"s3crets", b"s3cret"));
        assert!(!keys_match(b"", b"s3cret"));
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = Request::get("/")
            .header(AUTHORIZATION, "Bearer abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_bearer_token(&req), Some("abc"));

        let req = Request::get("/")
            .header(AUTHORIZATION, "Basic abc")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_bearer_token(&req), None);
    }
}
