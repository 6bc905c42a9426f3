//! # Error Types
//!
//! Domain-specific error types for customer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  customer-core errors (this file)                                   │
//! │  ├── CoreError        - Record integrity failures (duplicates)      │
//! │  ├── ValidationError  - Syntactic field failures                    │
//! │  └── StoreError       - What a store implementation may raise       │
//! │                                                                     │
//! │  customer-db errors (separate crate)                                │
//! │  └── DbError          - SQLite operation failures                   │
//! │                                                                     │
//! │  Flow: DbError → StoreError → CoreError → transport layer           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence of a record is never an error in this crate: reads return
//! `Option`, delete is a silent no-op on a missing id.

use thiserror::Error;

// =============================================================================
// Unique Fields
// =============================================================================

/// The three customer fields that carry a uniqueness rule.
///
/// Conflicts are checked in declaration order: full name first, then
/// email, then phone. Only the first offending field surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    FullName,
    Email,
    Phone,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::FullName => write!(f, "Full name"),
            UniqueField::Email => write!(f, "Email"),
            UniqueField::Phone => write!(f, "Phone number"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Record integrity errors raised by the customer service.
///
/// These are client errors: they are never retried and a failed
/// operation performs zero store writes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Another customer already holds this unique field value.
    ///
    /// ## When This Occurs
    /// - `add` finds any existing record with the same value
    /// - `update` finds a record with the same value and a different id
    ///   (a record may always keep its own current values)
    #[error("{field} {value} is already in use")]
    DuplicateField { field: UniqueField, value: String },

    /// Syntactic validation failure (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The store failed to execute an operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Syntactic field validation errors.
///
/// Raised by draft and patch validation before a record ever reaches
/// the service. The service itself only enforces uniqueness.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. malformed email, phone without '+').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures a `CustomerStore` implementation may raise.
///
/// Defined here so the store contract is self-contained; the SQLite
/// crate maps its own error taxonomy into these two variants at the
/// contract boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique index rejected a write that raced past the service's
    /// pre-checks. Carries the backend's constraint description.
    #[error("conflicting write: {0}")]
    Conflict(String),

    /// Any other backend failure (connection, query, migration).
    #[error("store backend failure: {0}")]
    Backend(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_messages() {
        let err = CoreError::DuplicateField {
            field: UniqueField::Email,
            value: "ann@x.com".to_string(),
        };
        assert_eq!(err.to_string(), "Email ann@x.com is already in use");

        // The phone conflict reports the phone value, not the email
        let err = CoreError::DuplicateField {
            field: UniqueField::Phone,
            value: "+15551234".to_string(),
        };
        assert_eq!(err.to_string(), "Phone number +15551234 is already in use");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "full name".to_string(),
        };
        assert_eq!(err.to_string(), "full name is required");

        let err = ValidationError::TooShort {
            field: "full name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "full name must be at least 2 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
