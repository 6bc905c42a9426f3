//! # Customer Repository
//!
//! Database operations for customer records.
//!
//! ## Key Operations
//! - Point lookups by id and by each unique field
//! - Active-only listing and point lookup (soft-delete aware)
//! - Insert/update behind a single `save` entry point
//!
//! The unique indexes on `full_name`, `email`, and `phone` are the
//! hard backstop for the service's uniqueness pre-checks: a write that
//! races past the checks fails here with a `UniqueViolation` instead of
//! committing a duplicate.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use customer_core::store::{CustomerStore, StoreResult};
use customer_core::Customer;

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.customers();
///
/// let customer = repo.get_by_email("ann@x.com").await?;
/// let active = repo.list_active().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by id, regardless of the active flag.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all active customers, ordered by id.
    pub async fn list_active(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE is_active = 1
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Gets a customer by id, only while active.
    pub async fn get_active_by_id(&self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE id = ?1 AND is_active = 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by exact full name (case-sensitive, active or
    /// not).
    pub async fn get_by_full_name(&self, full_name: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE full_name = ?1
            "#,
        )
        .bind(full_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by exact email (active or not).
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by exact phone number (active or not).
    pub async fn get_by_phone(&self, phone: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, full_name, email, phone, is_active, created, updated
            FROM customers
            WHERE phone = ?1
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Whether a row with this id exists, regardless of the active
    /// flag.
    pub async fn exists(&self, id: i64) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Counts all rows (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Inserts a new customer row.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - inserted record carrying the assigned rowid
    /// * `Err(DbError::UniqueViolation)` - a unique index rejected it
    pub async fn insert(&self, customer: &Customer) -> DbResult<Customer> {
        debug!(full_name = %customer.full_name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (full_name, email, phone, is_active, created, updated)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.is_active)
        .bind(customer.created)
        .bind(customer.updated)
        .execute(&self.pool)
        .await?;

        let mut saved = customer.clone();
        saved.id = Some(result.last_insert_rowid());
        Ok(saved)
    }

    /// Updates an existing customer row in place.
    ///
    /// `created` is immutable and deliberately absent from the SET
    /// list.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - no row with this id (or the record
    ///   was never inserted)
    pub async fn update(&self, customer: &Customer) -> DbResult<()> {
        let id = match customer.id {
            Some(id) => id,
            None => return Err(DbError::not_found("Customer", "unsaved record")),
        };

        debug!(id, "Updating customer");

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                full_name = ?2,
                email = ?3,
                phone = ?4,
                is_active = ?5,
                updated = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&customer.full_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.is_active)
        .bind(customer.updated)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }

    /// Persists a record: insert when it has no id yet, update in
    /// place otherwise.
    pub async fn save(&self, customer: Customer) -> DbResult<Customer> {
        match customer.id {
            None => self.insert(&customer).await,
            Some(_) => {
                self.update(&customer).await?;
                Ok(customer)
            }
        }
    }
}

// =============================================================================
// Store Contract
// =============================================================================

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_active(&self) -> StoreResult<Vec<Customer>> {
        Ok(self.list_active().await?)
    }

    async fn find_active_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.get_active_by_id(id).await?)
    }

    async fn find_by_full_name(&self, full_name: &str) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_full_name(full_name).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_email(email).await?)
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_phone(phone).await?)
    }

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(self.exists(id).await?)
    }

    async fn save(&self, customer: Customer) -> StoreResult<Customer> {
        Ok(CustomerRepository::save(self, customer).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
