//! # Repository Module
//!
//! Database repository implementations for the Customer API.
//!
//! The repository isolates all SQL behind a clean API and implements
//! the `CustomerStore` contract from customer-core, so the service
//! never sees sqlx types.
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - customer CRUD and unique-field
//!   lookups

pub mod customer;
