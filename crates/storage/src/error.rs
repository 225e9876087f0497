use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("A player named '{0}' already exists")]
    DuplicateName(String),

    #[error("No history entry to undo")]
    NothingToUndo,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// SQLite extended result codes 2067 (UNIQUE) and 1555 (primary key).
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if matches!(e.code().as_deref(), Some("2067") | Some("1555"))
        )
    }
}
