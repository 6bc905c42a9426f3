//! # Store Contract
//!
//! The persistence contract the customer service consumes.
//!
//! ## Contract Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       CustomerStore                                 │
//! │                                                                     │
//! │  Point lookups      find_by_id, find_active_by_id                   │
//! │  Unique lookups     find_by_full_name, find_by_email,               │
//! │                     find_by_phone                                   │
//! │  Listing            find_active                                     │
//! │  Existence          exists_by_id                                    │
//! │  Persistence        save (insert when id absent, else update)       │
//! │                                                                     │
//! │  Implementations:                                                   │
//! │  • MemoryStore        (this crate, tests and tooling)               │
//! │  • CustomerRepository (customer-db, SQLite)                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence is `Ok(None)`, never an error. Implementations are expected
//! to enforce the unique-field indexes as a backstop for the service's
//! pre-checks and surface a racing write as [`StoreError::Conflict`].

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Customer;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for customer records.
///
/// The service holds an exclusive store reference supplied at
/// construction, so any implementation can be substituted (the
/// in-memory fake in tests, SQLite in production).
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Point lookup by id, regardless of the active flag.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>>;

    /// All customers with `is_active = true`, in store-defined order.
    async fn find_active(&self) -> StoreResult<Vec<Customer>>;

    /// Point lookup by id restricted to `is_active = true`.
    async fn find_active_by_id(&self, id: i64) -> StoreResult<Option<Customer>>;

    /// Lookup by exact full name (case-sensitive).
    async fn find_by_full_name(&self, full_name: &str) -> StoreResult<Option<Customer>>;

    /// Lookup by exact email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>>;

    /// Lookup by exact phone number.
    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Customer>>;

    /// Whether a record with this id exists, regardless of the active
    /// flag.
    async fn exists_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Persists a record: insert when `id` is `None` (the store assigns
    /// the id), update in place otherwise. Returns the persisted record.
    async fn save(&self, customer: Customer) -> StoreResult<Customer>;
}
