use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;

use crate::db::entities::checklist_item;
use crate::db::services::item_service;
use crate::web::models::{CreateItem, UpdateItem};
use crate::web::{AppError, AppState};

pub fn create_item_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", put(update_item).delete(delete_item))
}

async fn list_items(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<checklist_item::Model>>, AppError> {
    let items = item_service::list_items(&app_state.db_pool).await?;
    Ok(Json(items))
}

async fn create_item(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateItem>,
) -> Result<Json<checklist_item::Model>, AppError> {
    let item = item_service::create_item(&app_state.db_pool, payload).await?;
    Ok(Json(item))
}

async fn update_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateItem>,
) -> Result<Json<checklist_item::Model>, AppError> {
    let item = item_service::update_item(&app_state.db_pool, &id, payload).await?;
    Ok(Json(item))
}

async fn delete_item(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    item_service::delete_item(&app_state.db_pool, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Item deleted" })))
}
