//! CRUD over `checklist_items`, plus the status write used by the health check.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::entities::{checklist_item, prelude::*};
use crate::db::enums::ItemStatus;
use crate::web::models::{CreateItem, UpdateItem};

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),
    #[error("Title and URL are required")]
    MissingFields,
    #[error("Item not found: {0}")]
    NotFound(String),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn create_item(
    db: &DatabaseConnection,
    item_data: CreateItem,
) -> Result<checklist_item::Model, ItemError> {
    let (title, url) = match (non_empty(item_data.title), non_empty(item_data.url)) {
        (Some(title), Some(url)) => (title, url),
        _ => return Err(ItemError::MissingFields),
    };

    let new_item = checklist_item::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(title),
        url: Set(url),
        note: Set(item_data.note),
        category: Set(Some(
            non_empty(item_data.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        )),
        color: Set(None),
        status: Set(ItemStatus::Unknown),
        last_checked: Set(None),
        created_at: Set(Utc::now()),
    };

    Ok(new_item.insert(db).await?)
}

/// All items, newest first.
pub async fn list_items(db: &DatabaseConnection) -> Result<Vec<checklist_item::Model>, DbErr> {
    ChecklistItem::find()
        .order_by_desc(checklist_item::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn update_item(
    db: &DatabaseConnection,
    id: &str,
    changes: UpdateItem,
) -> Result<checklist_item::Model, ItemError> {
    let item = ChecklistItem::find_by_id(id.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| ItemError::NotFound(id.to_owned()))?;

    let mut active_item: checklist_item::ActiveModel = item.into();
    if let Some(title) = changes.title {
        active_item.title = Set(title);
    }
    if let Some(url) = changes.url {
        active_item.url = Set(url);
    }
    if let Some(note) = changes.note {
        active_item.note = Set(note);
    }
    if let Some(category) = changes.category {
        active_item.category = Set(category);
    }
    if let Some(color) = changes.color {
        active_item.color = Set(color);
    }
    // A manual status change counts as a check.
    if let Some(status) = changes.status {
        active_item.status = Set(status);
        active_item.last_checked = Set(Some(Utc::now()));
    }

    Ok(active_item.update(db).await?)
}

pub async fn delete_item(db: &DatabaseConnection, id: &str) -> Result<(), ItemError> {
    let item = ChecklistItem::find_by_id(id.to_owned())
        .one(db)
        .await?
        .ok_or_else(|| ItemError::NotFound(id.to_owned()))?;
    item.delete(db).await?;
    Ok(())
}

/// Writes only `status` and `last_checked`; every other column is left as stored.
pub async fn update_item_status(
    db: &DatabaseConnection,
    id: &str,
    status: ItemStatus,
    last_checked: DateTime<Utc>,
) -> Result<(), DbErr> {
    let active_item = checklist_item::ActiveModel {
        id: Unchanged(id.to_owned()),
        status: Set(status),
        last_checked: Set(Some(last_checked)),
        ..Default::default()
    };
    active_item.update(db).await?;
    Ok(())
}
