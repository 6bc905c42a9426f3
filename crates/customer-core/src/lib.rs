//! # customer-core: Domain Logic for the Customer API
//!
//! This crate owns the record-integrity rules for the Customer entity:
//! uniqueness enforcement across full name, email, and phone, the
//! create / update / soft-delete lifecycle, and the update-timestamp
//! discipline.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Customer API Architecture                       │
//! │                                                                     │
//! │  Transport layer (HTTP controller, CLI, ...)                        │
//! │       │ parses requests, maps statuses - NOT in this workspace      │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │              ★ customer-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌────────────┐ ┌─────────┐ ┌─────────────────┐  │  │
//! │  │  │  types  │ │ validation │ │  store  │ │     service     │  │  │
//! │  │  │Customer │ │   rules    │ │contract │ │ uniqueness +    │  │  │
//! │  │  │  Draft  │ │   checks   │ │ + fake  │ │ lifecycle rules │  │  │
//! │  │  │  Patch  │ │            │ │         │ │                 │  │  │
//! │  │  └─────────┘ └────────────┘ └─────────┘ └─────────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  customer-db (SQLite store implementing the contract)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The Customer record plus creation/patch payloads
//! - [`validation`] - Syntactic field rules (lengths, email, phone pattern)
//! - [`store`] - The `CustomerStore` contract the service consumes
//! - [`memory`] - In-memory store for tests and tooling
//! - [`service`] - The `CustomerService` with all integrity rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **No I/O**: persistence happens behind the [`store::CustomerStore`]
//!    trait; this crate never touches a database or the network
//! 2. **Explicit Errors**: all failures are typed enums, never strings
//!    or panics
//! 3. **Absence is not an error**: missing records come back as `None`,
//!    the caller decides what that means

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use customer_core::Customer` instead of
// `use customer_core::types::Customer`

pub use error::{CoreError, StoreError, UniqueField, ValidationError};
pub use memory::MemoryStore;
pub use service::CustomerService;
pub use store::CustomerStore;
pub use types::{merge, Customer, CustomerDraft, CustomerPatch};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum length of a customer's full name, in characters.
pub const FULL_NAME_MIN: usize = 2;

/// Maximum length of a customer's full name, in characters.
pub const FULL_NAME_MAX: usize = 50;

/// Minimum length of a customer's email address, in characters.
pub const EMAIL_MIN: usize = 2;

/// Maximum length of a customer's email address, in characters.
pub const EMAIL_MAX: usize = 100;

/// Minimum length of a customer's phone number, including the leading '+'.
pub const PHONE_MIN: usize = 6;

/// Maximum length of a customer's phone number, including the leading '+'.
pub const PHONE_MAX: usize = 14;
