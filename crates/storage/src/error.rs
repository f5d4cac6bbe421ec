use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Email {0} is already registered")]
    DuplicateEmail(String),

    #[error("Class {class_id} is fully booked")]
    ClassFull { class_id: i64 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_foreign_key_violation()
        )
    }

    /// Turn a raw foreign key failure into a readable constraint violation.
    pub(crate) fn with_reference_context(self, what: &str) -> Self {
        if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(format!("{what} does not exist"))
        } else {
            self
        }
    }
}
