use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Open cross-origin policy used by the public poll endpoints.
///
/// Any origin, method and header is accepted, so browser preflight
/// (`OPTIONS`) requests are answered by this layer before routing.
/// Credentials are not allowed, which `Any` origins require.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_preflight_is_answered_for_any_origin() {
        let app = Router::new()
            .route("/events", post(|| async { "ok" }))
            .layer(create_cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/events")
                    .header("origin", "https://chosei.example")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }

    #[tokio::test]
    async fn test_simple_request_gets_allow_origin() {
        let app = Router::new()
            .route("/events", post(|| async { "ok" }))
            .layer(create_cors_layer());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/events")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
