use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_error) = error
            && let Some(code) = db_error.code()
            && matches!(
                &*code,
                UNIQUE_VIOLATION | FOREIGN_KEY_VIOLATION | CHECK_VIOLATION
            )
        {
            return StorageError::ConstraintViolation(db_error.message().to_string());
        }

        StorageError::Database(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_stays_a_database_error() {
        let error = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, StorageError::Database(_)));
    }

    #[test]
    fn test_validation_errors_convert() {
        let error = StorageError::from(ValidationErrors::new());
        assert!(matches!(error, StorageError::Validation(_)));
    }
}
