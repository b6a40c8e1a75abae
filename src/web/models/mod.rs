pub mod item_models;
pub mod vendor_models;

pub use item_models::*;
pub use vendor_models::*;
