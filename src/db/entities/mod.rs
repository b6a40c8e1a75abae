//! SeaORM entities for the dashboard tables.

pub mod checklist_item;
pub mod vendor_contract;

pub mod prelude {
    pub use super::checklist_item::Entity as ChecklistItem;
    pub use super::vendor_contract::Entity as VendorContract;
}
