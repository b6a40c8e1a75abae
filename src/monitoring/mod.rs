//! URL health checking: probing a single target and sweeping every stored item.

pub mod health_check_service;
pub mod prober;
pub mod store;

pub use health_check_service::{HealthCheckService, SweepError, SweepResult};
pub use prober::{HttpProber, Prober};
pub use store::{ItemStore, MonitoredItem, SeaOrmItemStore};
