pub mod check_routes;
pub mod item_routes;
pub mod vendor_routes;
