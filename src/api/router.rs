//! Router setup and configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, taxid};
use crate::api::middleware::auth::require_key;
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes (no auth required)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics));

    // Document routes (key auth when configured)
    let taxid_routes = Router::new()
        .route(
            "/validate",
            get(taxid::validate_query).post(taxid::validate),
        )
        .route("/validate/batch", post(taxid::validate_batch))
        .route("/generate", get(taxid::generate))
        .layer(middleware::from_fn_with_state(state.clone(), require_key));

    let mut router = Router::new()
        .merge(health_routes)
        .nest("/v1/taxid", taxid_routes)
        .fallback(taxid::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    if state.config.server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn app(api_key: &str) -> Router {
        let mut config = AppConfig::default();
        config.auth.api_key = api_key.to_string();
        create_router(AppState::new(Arc::new(config), None))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validate_query_route() {
        let response = app("")
            .oneshot(
                Request::get("/v1/taxid/validate?type=cpf&value=111.444.777-35")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = body_json(response).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["valid"], true);
    }

    #[tokio::test]
    async fn test_type_is_case_insensitive() {
        let response = app("")
            .oneshot(
                Request::get("/v1/taxid/validate?type=Cpf&value=111.444.777-35")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["valid"], true);
        assert_eq!(body["data"]["type"], "cpf");

        let response = app("")
            .oneshot(
                Request::post("/v1/taxid/validate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"type": "cNpJ", "value": "11.222.333/0001-81"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["valid"], true);
        assert_eq!(body["data"]["type"], "cnpj");
    }

    #[tokio::test]
    async fn test_undetectable_kind_reports_length() {
        let response = app("")
            .oneshot(
                Request::get("/v1/taxid/validate?value=123456789012")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["valid"], false);
        assert_eq!(body["data"]["type"], Value::Null);
        assert_eq!(body["data"]["reason"], "invalid_length");
        assert_eq!(body["data"]["code"], 3101);
    }

    #[tokio::test]
    async fn test_missing_value_is_bad_request() {
        let response = app("")
            .oneshot(
                Request::get("/v1/taxid/validate?type=cpf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 3002);
    }

    #[tokio::test]
    async fn test_unknown_type_is_bad_request() {
        let response = app("")
            .oneshot(
                Request::get("/v1/taxid/validate?type=rg&value=123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 3003);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = app("")
            .oneshot(
                Request::post("/v1/taxid/validate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"type\": \"cpf\""))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 3001);
    }

    #[tokio::test]
    async fn test_key_required_when_configured() {
        let app = app("s3cret");

        let response = app
            .clone()
            .oneshot(
                Request::get("/v1/taxid/generate?type=cpf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], 2001);

        let response = app
            .clone()
            .oneshot(
                Request::get("/v1/taxid/generate?type=cpf")
                    .header(header::AUTHORIZATION, "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], 2003);

        let response = app
            .oneshot(
                Request::get("/v1/taxid/generate?type=cpf")
                    .header(header::AUTHORIZATION, "Bearer s3cret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_is_open_when_key_configured() {
        let response = app("s3cret")
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_uses_envelope() {
        let response = app("")
            .oneshot(Request::get("/v2/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["code"], 4001);
    }
}
