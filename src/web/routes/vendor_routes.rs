use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

use crate::db::entities::vendor_contract;
use crate::db::services::vendor_service;
use crate::web::models::VendorPayload;
use crate::web::{AppError, AppState};

pub fn create_vendor_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route("/{id}", put(update_vendor).delete(delete_vendor))
}

async fn list_vendors(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<vendor_contract::Model>>, AppError> {
    Ok(Json(vendor_service::list_vendors(&app_state.db_pool).await?))
}

async fn create_vendor(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<VendorPayload>,
) -> Result<Json<vendor_contract::Model>, AppError> {
    let vendor = vendor_service::create_vendor(&app_state.db_pool, payload).await?;
    Ok(Json(vendor))
}

async fn update_vendor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<VendorPayload>,
) -> Result<Json<vendor_contract::Model>, AppError> {
    let vendor = vendor_service::update_vendor(&app_state.db_pool, &id, payload).await?;
    Ok(Json(vendor))
}

async fn delete_vendor(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    vendor_service::delete_vendor(&app_state.db_pool, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Vendor deleted" })))
}
