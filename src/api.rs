//! HTTP surface for the MinerU MCP server.
//!
//! - `GET /health` – Liveness check returning a fixed healthy status.
//! - `/mcp` – Streamable HTTP transport for the MCP server (tool listing and invocation).

use crate::mcp::{MineruMcpServer, SERVER_NAME};
use axum::{Json, Router, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde::Serialize;
use std::sync::Arc;

/// Path the MCP transport is mounted on.
pub const MCP_PATH: &str = "/mcp";
/// Path of the liveness check.
pub const HEALTH_PATH: &str = "/health";

/// Build the HTTP router exposing the health check and the MCP endpoint.
pub fn create_router(server: MineruMcpServer) -> Router {
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .route(HEALTH_PATH, get(health))
        .nest_service(MCP_PATH, mcp_service)
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVER_NAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, parsing::ParsingService};
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn router() -> Router {
        let config = Config::from_lookup(|key| {
            (key == "MINERU_URL").then(|| "http://127.0.0.1:9/file_parse".to_string())
        })
        .expect("config");
        let parsing = Arc::new(ParsingService::new(&config).expect("service"));
        create_router(MineruMcpServer::new(parsing))
    }

    #[tokio::test]
    async fn health_reports_fixed_status() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(
            json,
            json!({ "status": "healthy", "service": "mineru-mcp-server" })
        );
    }

    #[tokio::test]
    async fn health_rejects_other_methods() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(HEALTH_PATH)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/index")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router response");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
