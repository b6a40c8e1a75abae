use chrono::Utc;
use sea_orm::DbErr;
use serde::Serialize;
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::monitoring::prober::Prober;
use crate::monitoring::store::{ItemStore, MonitoredItem};

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("Failed to list items: {0}")]
    ListItems(#[source] DbErr),
    #[error("Health check sweep did not complete: {0}")]
    Interrupted(#[source] JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepResult {
    pub count: usize,
}

/// Probes every stored item and records the outcome on the item.
///
/// Sweeps are not serialized against each other: two overlapping sweeps both
/// write every row and the later write wins.
pub struct HealthCheckService {
    store: Arc<dyn ItemStore>,
    prober: Arc<dyn Prober>,
}

impl HealthCheckService {
    pub fn new(store: Arc<dyn ItemStore>, prober: Arc<dyn Prober>) -> Self {
        Self { store, prober }
    }

    /// One pass over the items present when the sweep starts. Every item is
    /// probed concurrently; a failed write for one item is logged and does not
    /// affect the rest.
    ///
    /// The pass runs on its own task, so dropping the returned future (a caller
    /// that disconnects, say) does not stop items from being checked and written.
    pub async fn run_sweep(&self) -> Result<SweepResult, SweepError> {
        let store = self.store.clone();
        let prober = self.prober.clone();
        tokio::spawn(sweep_items(store, prober))
            .await
            .map_err(SweepError::Interrupted)?
    }

    pub async fn start_periodic_sweep(self: Arc<Self>, period_seconds: u64) {
        info!(interval_seconds = period_seconds, "Scheduled health check started.");
        let mut interval = interval(Duration::from_secs(period_seconds));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if let Err(e) = self.run_sweep().await {
                error!(error = %e, "Scheduled health check failed.");
            }
        }
    }
}

async fn sweep_items(
    store: Arc<dyn ItemStore>,
    prober: Arc<dyn Prober>,
) -> Result<SweepResult, SweepError> {
    let items = store.list_all().await.map_err(SweepError::ListItems)?;
    let count = items.len();
    debug!(count, "Starting health check sweep.");

    let mut tasks = JoinSet::new();
    for item in items {
        let store = store.clone();
        let prober = prober.clone();
        tasks.spawn(async move { check_item(store.as_ref(), prober.as_ref(), item).await });
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "Health check task did not complete.");
        }
    }

    info!(count, "Health check sweep completed.");
    Ok(SweepResult { count })
}

async fn check_item(store: &dyn ItemStore, prober: &dyn Prober, item: MonitoredItem) {
    let status = prober.probe(&item.url).await;
    let checked_at = Utc::now();
    if let Err(e) = store.update_status(&item.id, status, checked_at).await {
        warn!(item_id = %item.id, url = %item.url, error = %e, "Failed to record health check result.");
    }
}
