//! CRUD over `vendor_contracts`.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::entities::{prelude::*, vendor_contract};
use crate::web::models::VendorPayload;

#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),
    #[error("Vendor name is required")]
    MissingVendorName,
    #[error("Invalid expiry date: {0}")]
    InvalidExpiryDate(String),
    #[error("Vendor not found: {0}")]
    NotFound(String),
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
/// Empty input means no expiry.
pub fn parse_expiry_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, VendorError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Some(naive.and_utc()))
        .ok_or_else(|| VendorError::InvalidExpiryDate(raw.to_string()))
}

pub async fn create_vendor(
    db: &DatabaseConnection,
    payload: VendorPayload,
) -> Result<vendor_contract::Model, VendorError> {
    let vendor_name = payload
        .vendor_name
        .filter(|name| !name.trim().is_empty())
        .ok_or(VendorError::MissingVendorName)?;
    let expiry_date = parse_expiry_date(payload.expiry_date.as_deref())?;

    let new_vendor = vendor_contract::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        vendor_name: Set(vendor_name),
        contact_name: Set(payload.contact_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        contract_type: Set(payload.contract_type),
        expiry_date: Set(expiry_date),
        note: Set(payload.note),
        created_at: Set(Utc::now()),
    };

    Ok(new_vendor.insert(db).await?)
}

pub async fn list_vendors(db: &DatabaseConnection) -> Result<Vec<vendor_contract::Model>, DbErr> {
    VendorContract::find()
        .order_by_desc(vendor_contract::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn update_vendor(
    db: &DatabaseConnection,
    id: &str,
    payload: VendorPayload,
) -> Result<vendor_contract::Model, VendorError> {
    let expiry_date = parse_expiry_date(payload.expiry_date.as_deref())?;
    let vendor = VendorContract::find_by_id(id.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| VendorError::NotFound(id.to_owned()))?;

    let mut active_vendor: vendor_contract::ActiveModel = vendor.into();
    if let Some(vendor_name) = payload.vendor_name.filter(|name| !name.trim().is_empty()) {
        active_vendor.vendor_name = Set(vendor_name);
    }
    if let Some(contact_name) = payload.contact_name {
        active_vendor.contact_name = Set(Some(contact_name));
    }
    if let Some(email) = payload.email {
        active_vendor.email = Set(Some(email));
    }
    if let Some(phone) = payload.phone {
        active_vendor.phone = Set(Some(phone));
    }
    if let Some(contract_type) = payload.contract_type {
        active_vendor.contract_type = Set(Some(contract_type));
    }
    if let Some(note) = payload.note {
        active_vendor.note = Set(Some(note));
    }
    // The edit form always submits the date; leaving it out clears it.
    active_vendor.expiry_date = Set(expiry_date);

    Ok(active_vendor.update(db).await?)
}

pub async fn delete_vendor(db: &DatabaseConnection, id: &str) -> Result<(), VendorError> {
    let vendor = VendorContract::find_by_id(id.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| VendorError::NotFound(id.to_owned()))?;
    vendor.delete(db).await?;
    Ok(())
}
