use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

use crate::web::models::CheckResponse;
use crate::web::{AppError, AppState};

pub fn create_check_router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(run_check))
}

#[axum::debug_handler]
async fn run_check(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<CheckResponse>, AppError> {
    let result = app_state.health_check_service.run_sweep().await?;
    Ok(Json(CheckResponse {
        message: "Health check completed".to_string(),
        count: result.count,
    }))
}
