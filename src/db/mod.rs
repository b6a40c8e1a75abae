pub mod entities;
pub mod enums;
pub mod schema;
pub mod services;

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    /// A private in-memory SQLite database with the schema applied.
    pub(crate) async fn memory_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
        // Every pooled connection would otherwise get its own empty database.
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        super::schema::ensure_schema(&db).await.unwrap();
        db
    }
}
