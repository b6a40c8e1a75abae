use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::db::services::{ItemError, VendorError};
use crate::monitoring::SweepError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Not Found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {msg}"),
            ),
            AppError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (status, Json(serde_json::json!({ "error": error_message }))).into_response()
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::DbErr(e) => e.into(),
            ItemError::MissingFields => AppError::InvalidInput(err.to_string()),
            ItemError::NotFound(_) => AppError::NotFound("Item not found".to_string()),
        }
    }
}

impl From<VendorError> for AppError {
    fn from(err: VendorError) -> Self {
        match err {
            VendorError::DbErr(e) => e.into(),
            VendorError::MissingVendorName | VendorError::InvalidExpiryDate(_) => {
                AppError::InvalidInput(err.to_string())
            }
            VendorError::NotFound(_) => AppError::NotFound("Vendor not found".to_string()),
        }
    }
}

// Callers only learn that the sweep failed; the cause goes to the log.
impl From<SweepError> for AppError {
    fn from(err: SweepError) -> Self {
        error!(error = %err, "Health check failed.");
        AppError::InternalServerError("Health check failed".to_string())
    }
}
