//! # customer-db: Database Layer for the Customer API
//!
//! SQLite persistence for customer records, implementing the
//! `CustomerStore` contract from customer-core.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Customer API Data Flow                          │
//! │                                                                     │
//! │  CustomerService (customer-core)                                    │
//! │       │  via the CustomerStore trait                                │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  customer-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │  ┌─────────────┐   ┌────────────────────┐   ┌─────────────┐  │  │
//! │  │  │  Database   │   │ CustomerRepository │   │ Migrations  │  │  │
//! │  │  │  (pool.rs)  │◄──│  (repository/)     │   │ (embedded)  │  │  │
//! │  │  └─────────────┘   └────────────────────┘   └─────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (WAL mode)                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The customer repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use customer_core::CustomerService;
//! use customer_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./customers.db")).await?;
//! let service = CustomerService::new(db.customers());
//!
//! let saved = service.add(draft.into_customer()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::customer::CustomerRepository;
