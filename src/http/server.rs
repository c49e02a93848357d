//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers and fallbacks
//! - Wire up middleware (timeout, request ID, tracing, CORS)
//! - Serve on a bound listener until shutdown is signalled
//!
//! # Design Decisions
//! - CORS permits any origin on every route; no credentials are involved
//! - Unmatched routes and unsupported methods go through the same structured
//!   error type as handler failures, so no response bypasses the taxonomy

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers;

/// HTTP server for the prime number API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            router: Self::build_router(&config),
        }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(config: &ServerConfig) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/prime/check/{number}", get(handlers::check_prime_path))
            .route("/prime", get(handlers::check_prime_query))
            .route("/health", get(handlers::health))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::method_not_allowed)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(cors)
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("shutdown signal received, draining connections");
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router() -> Router {
        HttpServer::build_router(&ServerConfig::default())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_check_prime_via_path() {
        let response = router()
            .oneshot(Request::get("/prime/check/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({
                "number": 7,
                "is_prime": true,
                "message": "7 is a prime number",
            })
        );
    }

    #[tokio::test]
    async fn test_check_prime_via_query() {
        let response = router()
            .oneshot(Request::get("/prime?number=97").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["number"], 97);
        assert_eq!(json["is_prime"], true);
    }

    #[tokio::test]
    async fn test_unparseable_path_segment() {
        let response = router()
            .oneshot(Request::get("/prime/check/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Invalid Number Format");
        assert_eq!(json["statusCode"], 400);
    }

    #[tokio::test]
    async fn test_missing_query_parameter() {
        let response = router()
            .oneshot(Request::get("/prime").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Missing Parameter");
    }

    #[tokio::test]
    async fn test_unknown_route_is_structured_404() {
        let response = router()
            .oneshot(Request::get("/unknown/route").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Not Found");
        assert_eq!(json["detail"], "The requested resource was not found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_structured_405() {
        let response = router()
            .oneshot(Request::post("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["category"], "Method Not Allowed");
        assert_eq!(json["statusCode"], 405);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = router()
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
