use axum::{
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::monitoring::HealthCheckService;
use crate::server::config::ServerConfig;
use crate::web::routes::*;

pub use crate::web::error::AppError;

pub mod error;
pub mod models;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabaseConnection,
    pub health_check_service: Arc<HealthCheckService>,
    pub config: Arc<ServerConfig>,
}

async fn health_check_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn api_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}

/// Single-page app files with `index.html` standing in for client-side routes.
pub fn create_static_file_service(frontend_path: &str) -> ServeDir<ServeFile> {
    let index = Path::new(frontend_path).join("index.html");
    ServeDir::new(frontend_path).fallback(ServeFile::new(index))
}

pub fn create_axum_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    let api = Router::new()
        .nest("/items", item_routes::create_item_router())
        .nest("/vendors", vendor_routes::create_vendor_router())
        .nest("/check", check_routes::create_check_router())
        .fallback(api_not_found);

    let app = Router::new()
        .nest("/api", api)
        .fallback_service(create_static_file_service(&app_state.config.frontend_path));

    let router = if app_state.config.base_path.is_empty() {
        Router::new().merge(app)
    } else {
        Router::new().nest(&app_state.config.base_path, app)
    };

    router
        .route("/health", get(health_check_handler))
        .with_state(app_state)
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::memory_db;
    use crate::monitoring::{HttpProber, SeaOrmItemStore};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_config(frontend_path: &str) -> ServerConfig {
        ServerConfig {
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            base_path: "/checklist".to_string(),
            frontend_path: frontend_path.to_string(),
            log_dir: "logs".to_string(),
            check_timeout_ms: 1000,
            check_user_agent: "ChecklistMonitor/1.0".to_string(),
            check_interval_seconds: 0,
        }
    }

    async fn test_router(frontend_path: &str) -> Router {
        let db = memory_db().await;
        let prober = HttpProber::new(Duration::from_millis(1000), "ChecklistMonitor/1.0").unwrap();
        let health_check_service = Arc::new(HealthCheckService::new(
            Arc::new(SeaOrmItemStore::new(db.clone())),
            Arc::new(prober),
        ));
        create_axum_router(Arc::new(AppState {
            db_pool: db,
            health_check_service,
            config: Arc::new(test_config(frontend_path)),
        }))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_liveness_endpoint() {
        let router = test_router("missing-dist").await;
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_item_crud_flow() {
        let router = test_router("missing-dist").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/checklist/api/items",
            Some(json!({ "title": "Docs", "url": "https://docs.rs" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Unknown");
        assert_eq!(body["category"], "General");
        assert_eq!(body["lastChecked"], Value::Null);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &router,
            Method::PUT,
            &format!("/checklist/api/items/{id}"),
            Some(json!({ "status": "OK", "note": "checked by hand" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OK");
        assert_eq!(body["note"], "checked by hand");
        assert!(body["lastChecked"].is_string());

        let (status, body) = send(&router, Method::GET, "/checklist/api/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(
            &router,
            Method::DELETE,
            &format!("/checklist/api/items/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Item deleted" }));

        let (status, _) = send(
            &router,
            Method::DELETE,
            &format!("/checklist/api/items/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_item_without_title_is_rejected() {
        let router = test_router("missing-dist").await;
        let (status, body) = send(
            &router,
            Method::POST,
            "/checklist/api/items",
            Some(json!({ "url": "https://docs.rs" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Title and URL are required" }));
    }

    #[tokio::test]
    async fn test_vendor_create_normalizes_date() {
        let router = test_router("missing-dist").await;
        let (status, body) = send(
            &router,
            Method::POST,
            "/checklist/api/vendors",
            Some(json!({ "vendorName": "Acme", "expiryDate": "2025-03-01" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vendorName"], "Acme");
        assert!(body["expiryDate"].as_str().unwrap().starts_with("2025-03-01T00:00:00"));

        let (status, _) = send(
            &router,
            Method::POST,
            "/checklist/api/vendors",
            Some(json!({ "vendorName": "Acme", "expiryDate": "soon" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_on_empty_store() {
        let router = test_router("missing-dist").await;
        let (status, body) = send(&router, Method::POST, "/checklist/api/check", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Health check completed", "count": 0 }));
    }

    #[tokio::test]
    async fn test_check_marks_unreachable_item() {
        let router = test_router("missing-dist").await;
        let (_, created) = send(
            &router,
            Method::POST,
            "/checklist/api/items",
            Some(json!({ "title": "Nowhere", "url": "http://nonexistent.invalid" })),
        )
        .await;

        let (status, body) = send(&router, Method::POST, "/checklist/api/check", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);

        let (_, items) = send(&router, Method::GET, "/checklist/api/items", None).await;
        assert_eq!(items[0]["id"], created["id"]);
        assert_eq!(items[0]["status"], "Error");
        assert!(items[0]["lastChecked"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let router = test_router("missing-dist").await;
        let (status, body) = send(&router, Method::GET, "/checklist/api/links", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not Found" }));
    }

    #[tokio::test]
    async fn test_spa_routes_fall_back_to_index() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>dashboard</html>").unwrap();
        let router = test_router(dist.path().to_str().unwrap()).await;

        let request = Request::builder()
            .uri("/checklist/contracts")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>dashboard</html>");
    }
}
