mod db;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;

pub use db::Database;

#[cfg(test)]
pub(crate) mod testing {
    use sqlx::SqlitePool;

    use crate::Database;

    /// Fresh migrated in-memory database for a test.
    pub async fn memory_pool() -> SqlitePool {
        let db = Database::in_memory().await.expect("in-memory database");
        db.run_migrations().await.expect("migrations");
        db.pool().clone()
    }
}
