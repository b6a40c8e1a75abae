//! Creates the dashboard tables from the entity definitions when they are missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::db::entities::prelude::{ChecklistItem, VendorContract};

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table_if_missing(db, &schema, ChecklistItem).await?;
    create_table_if_missing(db, &schema, VendorContract).await?;
    info!("Database schema is ready.");
    Ok(())
}

async fn create_table_if_missing<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(db.get_database_backend().build(&stmt)).await?;
    Ok(())
}
