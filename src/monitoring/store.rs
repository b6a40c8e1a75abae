use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::db::enums::ItemStatus;
use crate::db::services::item_service;

/// The slice of a stored item that a health check reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredItem {
    pub id: String,
    pub url: String,
    pub status: ItemStatus,
    pub last_checked: Option<DateTime<Utc>>,
}

/// Storage the health check sweeps over. Implementations must accept
/// concurrent `update_status` calls for different ids.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<MonitoredItem>, DbErr>;

    async fn update_status(
        &self,
        id: &str,
        status: ItemStatus,
        last_checked: DateTime<Utc>,
    ) -> Result<(), DbErr>;
}

#[derive(Clone)]
pub struct SeaOrmItemStore {
    db: DatabaseConnection,
}

impl SeaOrmItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for SeaOrmItemStore {
    async fn list_all(&self) -> Result<Vec<MonitoredItem>, DbErr> {
        let items = item_service::list_items(&self.db).await?;
        Ok(items
            .into_iter()
            .map(|item| MonitoredItem {
                id: item.id,
                url: item.url,
                status: item.status,
                last_checked: item.last_checked,
            })
            .collect())
    }

    async fn update_status(
        &self,
        id: &str,
        status: ItemStatus,
        last_checked: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        item_service::update_item_status(&self.db, id, status, last_checked).await
    }
}
