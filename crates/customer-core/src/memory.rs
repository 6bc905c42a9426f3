//! # In-Memory Store
//!
//! A map-backed implementation of the store contract.
//!
//! Serves as the substitution fake for service tests and as a zero-setup
//! store for tooling. Every operation takes the single mutex, so the
//! check-then-write window of a save is serialized the same way the
//! SQLite store's unique indexes serialize it.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::{CustomerStore, StoreResult};
use crate::types::Customer;

/// In-memory customer store with sequential id assignment.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    // BTreeMap keeps listing order deterministic across runs
    rows: BTreeMap<i64, Customer>,
    next_id: i64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))
    }

    /// Number of records held, active or not.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn find_active(&self) -> StoreResult<Vec<Customer>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn find_active_by_id(&self, id: i64) -> StoreResult<Option<Customer>> {
        Ok(self.lock()?.rows.get(&id).filter(|c| c.is_active).cloned())
    }

    async fn find_by_full_name(&self, full_name: &str) -> StoreResult<Option<Customer>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|c| c.full_name == full_name)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(self.lock()?.rows.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Customer>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|c| c.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn exists_by_id(&self, id: i64) -> StoreResult<bool> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    async fn save(&self, mut customer: Customer) -> StoreResult<Customer> {
        let mut inner = self.lock()?;

        // Unique-index backstop, same contract as the SQLite schema
        for other in inner.rows.values() {
            if other.id == customer.id {
                continue;
            }
            if other.full_name == customer.full_name {
                return Err(StoreError::Conflict(format!(
                    "customers.full_name: {}",
                    customer.full_name
                )));
            }
            if other.email == customer.email {
                return Err(StoreError::Conflict(format!(
                    "customers.email: {}",
                    customer.email
                )));
            }
            if customer.phone.is_some() && other.phone == customer.phone {
                return Err(StoreError::Conflict(format!(
                    "customers.phone: {}",
                    customer.phone.as_deref().unwrap_or_default()
                )));
            }
        }

        let id = match customer.id {
            Some(id) => id,
            None => {
                inner.next_id += 1;
                inner.next_id
            }
        };
        customer.id = Some(id);
        inner.rows.insert(id, customer.clone());

        Ok(customer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
