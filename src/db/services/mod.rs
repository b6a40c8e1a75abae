//! Data access for the dashboard tables. HTTP handlers and the health check
//! work through these functions instead of touching entities directly.

pub mod item_service;
pub mod vendor_service;

pub use item_service::ItemError;
pub use vendor_service::VendorError;
