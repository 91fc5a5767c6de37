//! HTTP dashboard server built on axum.

pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::{ApiError, ErrorBody, handle_panic};
pub use state::AppState;

use crate::config::Config;
use crate::types::Result;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/data", get(handlers::get_data))
        .route("/api/filter", get(handlers::filter_data))
        .route("/api/live", get(handlers::live))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Serve the dashboard until Ctrl-C.
pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until the process is killed
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::from_config(&Config::default()).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = ServiceExt::<Request<Body>>::oneshot(app(), req)
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), 1_000_000)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_dashboard() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("plotly"));
        assert!(html.contains("/api/data"));
    }

    #[tokio::test]
    async fn test_data_endpoint() {
        let (status, json) = get_json("/api/data").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["insights"]["total_flights"], 50);
        assert!(json["insights"]["popular_routes"].as_array().unwrap().len() <= 10);
        assert!(json["insights"]["demand_periods"].as_array().unwrap().len() <= 5);
        assert_eq!(json["charts"].as_object().unwrap().len(), 3);
        assert!(
            json["ai_insights"]
                .as_str()
                .unwrap()
                .starts_with("**Market Analysis Summary**")
        );
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive() {
        let (status, json) = get_json("/api/filter?origin=sydney").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        for route in json["insights"]["popular_routes"].as_array().unwrap() {
            assert_eq!(route["origin"], "Sydney");
        }
    }

    #[tokio::test]
    async fn test_filter_without_params_keeps_everything() {
        let (status, json) = get_json("/api/filter?origin=&destination=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["insights"]["total_flights"], 50);
    }

    #[tokio::test]
    async fn test_filter_rejects_bad_date() {
        let (status, json) = get_json("/api/filter?date_from=not-a-date").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("date_from"));
    }

    #[tokio::test]
    async fn test_filter_rejects_reversed_range() {
        let (status, json) =
            get_json("/api/filter?date_from=2024-02-01&date_to=2024-01-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_live_without_key_is_empty() {
        let (status, json) = get_json("/api/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 0);
        assert_eq!(json["flights"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, json) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, _) = get("/api/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
