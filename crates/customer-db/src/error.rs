//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (customer-core) ← at the CustomerStore boundary         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CoreError ← what the service's callers see                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use customer_core::StoreError;
use thiserror::Error;

/// Database operation errors.
///
/// These wrap sqlx errors and provide additional context. At the
/// `CustomerStore` boundary they collapse into the two-variant
/// `StoreError` the core crate knows about.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found where one was required (e.g. updating a row
    /// that was never inserted).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique index violation.
    ///
    /// ## When This Occurs
    /// - A write raced past the service's uniqueness pre-checks and hit
    ///   one of the unique indexes on full_name, email, or phone
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Database connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database + "UNIQUE constraint failed" → UniqueViolation
/// sqlx::Error::PoolTimedOut / PoolClosed             → ConnectionFailed
/// Other                                              → Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraint hits as:
                // "UNIQUE constraint failed: <table>.<column>"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => {
                DbError::ConnectionFailed("Connection pool timed out".to_string())
            }

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Collapse the db taxonomy into the store contract's error type.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, .. } => StoreError::Conflict(field),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let db_err = DbError::UniqueViolation {
            field: "customers.email".to_string(),
            value: "unknown".to_string(),
        };
        let store_err: StoreError = db_err.into();
        assert!(matches!(store_err, StoreError::Conflict(_)));
    }

    #[test]
    fn test_other_errors_map_to_backend() {
        let db_err = DbError::QueryFailed("syntax error".to_string());
        let store_err: StoreError = db_err.into();
        assert!(matches!(store_err, StoreError::Backend(_)));
    }
}
