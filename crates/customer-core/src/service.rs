//! # Customer Record Service
//!
//! The record-integrity rules between a transport layer and the store:
//! uniqueness enforcement, the active/inactive lifecycle, and the
//! update-timestamp discipline.
//!
//! ## Uniqueness Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Uniqueness Check (add and update)                   │
//! │                                                                     │
//! │  for field in [full_name, email, phone]:   (fixed priority order)   │
//! │       │                                                             │
//! │       ├── value absent? (phone only) → skip field                   │
//! │       │                                                             │
//! │       ├── store lookup by exact value                               │
//! │       │      │                                                      │
//! │       │      ├── no record → field is free                          │
//! │       │      │                                                      │
//! │       │      └── record found                                       │
//! │       │             ├── same id as subject → self-match, allowed    │
//! │       │             └── different id (or subject has no id yet)     │
//! │       │                    → DuplicateField, STOP                   │
//! │       ▼                                                             │
//! │  all clear → exactly one store write                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed check performs zero store writes; only the first offending
//! field ever surfaces. Inactive records take part in the lookups, so a
//! soft-deleted customer keeps occupying its unique values.

use chrono::Utc;
use tracing::debug;

use crate::error::{CoreError, CoreResult, UniqueField};
use crate::store::CustomerStore;
use crate::types::Customer;

/// Business rules for the Customer entity.
///
/// Holds an exclusive reference to its store dependency, supplied at
/// construction, so tests can substitute the in-memory fake.
///
/// ## Usage
/// ```rust,ignore
/// let service = CustomerService::new(MemoryStore::new());
///
/// let saved = service.add(draft.into_customer()).await?;
/// let active = service.find_active().await?;
/// service.delete_by_id(saved.id.unwrap()).await?;
/// ```
#[derive(Debug)]
pub struct CustomerService<S: CustomerStore> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    /// Creates a service on top of the given store.
    pub fn new(store: S) -> Self {
        CustomerService { store }
    }

    /// Adds a new customer.
    ///
    /// The input carries no id yet, so any record found by a unique
    /// lookup is a conflict. Checks run in priority order full name,
    /// email, phone; the first conflict aborts the operation.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - the persisted record, id assigned, `created`
    ///   set, `updated` absent
    /// * `Err(CoreError::DuplicateField)` - a unique value is taken;
    ///   nothing was written
    pub async fn add(&self, customer: Customer) -> CoreResult<Customer> {
        debug!(full_name = %customer.full_name, "Adding customer");

        self.ensure_unique(&customer).await?;

        let saved = self.store.save(customer).await?;
        debug!(id = ?saved.id, "Customer added");
        Ok(saved)
    }

    /// Lists all active customers, in store-defined order.
    pub async fn find_active(&self) -> CoreResult<Vec<Customer>> {
        Ok(self.store.find_active().await?)
    }

    /// Fetches the customer with the given id, only while active.
    ///
    /// Also serves as the existence gate for update and delete: a
    /// soft-deleted record is invisible here even though it still
    /// exists in the store.
    pub async fn find_active_by_id(&self, id: i64) -> CoreResult<Option<Customer>> {
        Ok(self.store.find_active_by_id(id).await?)
    }

    /// Updates an existing customer.
    ///
    /// The input is the merged result of the stored record and a
    /// caller-supplied patch (see [`crate::types::merge`]) and carries
    /// the original id, so a unique lookup that finds the record itself
    /// is not a conflict.
    ///
    /// `updated` is refreshed on every successful update, even when no
    /// field actually changed value.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - the persisted record with `updated` set
    /// * `Err(CoreError::DuplicateField)` - a unique value belongs to a
    ///   different record; nothing was written
    pub async fn update(&self, mut customer: Customer) -> CoreResult<Customer> {
        debug!(id = ?customer.id, "Updating customer");

        self.ensure_unique(&customer).await?;

        customer.updated = Some(Utc::now().timestamp());
        let saved = self.store.save(customer).await?;
        debug!(id = ?saved.id, "Customer updated");
        Ok(saved)
    }

    /// Whether a record with this id exists, active or not.
    pub async fn exists_by_id(&self, id: i64) -> CoreResult<bool> {
        Ok(self.store.exists_by_id(id).await?)
    }

    /// Soft-deletes a customer.
    ///
    /// Looks the record up through the active-only path; when found
    /// (and still active), flips `is_active` and saves. A missing or
    /// already-inactive id is a silent no-op, which makes the operation
    /// idempotent. `updated` is not touched.
    pub async fn delete_by_id(&self, id: i64) -> CoreResult<()> {
        debug!(id, "Soft-deleting customer");

        if let Some(mut customer) = self.store.find_active_by_id(id).await? {
            if customer.is_active {
                customer.is_active = false;
                self.store.save(customer).await?;
                debug!(id, "Customer deactivated");
            }
        }

        Ok(())
    }

    /// Runs the three uniqueness checks in priority order.
    ///
    /// A conflict is a record found by exact value whose id differs
    /// from the subject's (a subject without an id conflicts with any
    /// match). The phone check is skipped when the subject has no
    /// phone.
    async fn ensure_unique(&self, subject: &Customer) -> CoreResult<()> {
        if let Some(found) = self.store.find_by_full_name(&subject.full_name).await? {
            if found.id != subject.id {
                return Err(CoreError::DuplicateField {
                    field: UniqueField::FullName,
                    value: subject.full_name.clone(),
                });
            }
        }

        if let Some(found) = self.store.find_by_email(&subject.email).await? {
            if found.id != subject.id {
                return Err(CoreError::DuplicateField {
                    field: UniqueField::Email,
                    value: subject.email.clone(),
                });
            }
        }

        if let Some(phone) = &subject.phone {
            if let Some(found) = self.store.find_by_phone(phone).await? {
                if found.id != subject.id {
                    return Err(CoreError::DuplicateField {
                        field: UniqueField::Phone,
                        value: phone.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::types::{merge, CustomerPatch};

    fn service() -> CustomerService<MemoryStore> {
        CustomerService::new(MemoryStore::new())
    }

    fn ann() -> Customer {
        Customer::new("Ann Lee", "ann@x.com", Some("+15551234".to_string()))
    }

    fn bo() -> Customer {
        Customer::new("Bo Kim", "bo@x.com", Some("+15555678".to_string()))
    }

    #[tokio::test]
    async fn test_add_fresh_customer() {
        let service = service();

        let saved = service.add(ann()).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.is_active);
        assert!(saved.created > 0);
        assert_eq!(saved.updated, None);
    }

    #[tokio::test]
    async fn test_add_duplicate_email_fails_without_write() {
        let service = service();
        service.add(ann()).await.unwrap();

        let second = Customer::new("Bo Kim", "ann@x.com", Some("+15555678".to_string()));
        let err = service.add(second).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::DuplicateField {
                field: UniqueField::Email,
                ..
            }
        ));
        // No store write happened for the rejected add
        assert_eq!(service.find_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_full_name_conflict_surfaces_first() {
        let service = service();
        service.add(ann()).await.unwrap();

        // Conflicts on all three fields at once; full name has priority
        let err = service.add(ann()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::DuplicateField {
                field: UniqueField::FullName,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_phone_conflict_reports_phone_value() {
        let service = service();
        service.add(ann()).await.unwrap();

        let second = Customer::new("Bo Kim", "bo@x.com", Some("+15551234".to_string()));
        let err = service.add(second).await.unwrap_err();

        assert_eq!(err.to_string(), "Phone number +15551234 is already in use");
    }

    #[tokio::test]
    async fn test_add_without_phone_skips_phone_check() {
        let service = service();
        service.add(Customer::new("Ann Lee", "ann@x.com", None)).await.unwrap();

        // Second phoneless customer does not collide on the absent field
        let saved = service.add(Customer::new("Bo Kim", "bo@x.com", None)).await;
        assert!(saved.is_ok());
    }

    #[tokio::test]
    async fn test_update_with_taken_email_fails() {
        let service = service();
        let a = service.add(ann()).await.unwrap();
        let b = service.add(bo()).await.unwrap();

        let patch = CustomerPatch {
            full_name: None,
            email: Some(b.email.clone()),
            phone: None,
        };
        let err = service.update(merge(&a, &patch)).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::DuplicateField {
                field: UniqueField::Email,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_update_keeping_own_values_succeeds() {
        let service = service();
        let a = service.add(ann()).await.unwrap();

        // Self-match on every unique field is not a conflict
        let updated = service.update(merge(&a, &CustomerPatch::default())).await.unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.email, a.email);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_timestamp() {
        let service = service();
        let a = service.add(ann()).await.unwrap();
        assert_eq!(a.updated, None);

        let first = service.update(a).await.unwrap();
        let first_stamp = first.updated.expect("updated set on first update");

        // Refreshed even when nothing changed value
        let second = service.update(first).await.unwrap();
        let second_stamp = second.updated.expect("updated set on second update");

        assert!(second_stamp >= first_stamp);
    }

    #[tokio::test]
    async fn test_update_preserves_created() {
        let service = service();
        let a = service.add(ann()).await.unwrap();

        let updated = service.update(a.clone()).await.unwrap();
        assert_eq!(updated.created, a.created);
    }

    #[tokio::test]
    async fn test_delete_flips_active_and_is_idempotent() {
        let service = service();
        let a = service.add(ann()).await.unwrap();
        let id = a.id.unwrap();

        service.delete_by_id(id).await.unwrap();
        assert!(service.find_active_by_id(id).await.unwrap().is_none());

        // Second delete of the same id is a silent no-op
        service.delete_by_id(id).await.unwrap();

        // Deleting an id that never existed is also silent
        service.delete_by_id(9999).await.unwrap();
    }

    #[tokio::test]
    async fn test_deleted_record_still_exists_by_id() {
        let service = service();
        let a = service.add(ann()).await.unwrap();
        let id = a.id.unwrap();

        service.delete_by_id(id).await.unwrap();

        assert!(service.find_active_by_id(id).await.unwrap().is_none());
        assert!(service.exists_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_active_excludes_deleted() {
        let service = service();
        let a = service.add(ann()).await.unwrap();
        service.add(bo()).await.unwrap();

        service.delete_by_id(a.id.unwrap()).await.unwrap();

        let active = service.find_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].full_name, "Bo Kim");
    }

    #[tokio::test]
    async fn test_deleted_record_still_blocks_unique_fields() {
        // Soft-deleted customers keep occupying their unique values;
        // this pins the behavior so any future change is deliberate
        let service = service();
        let a = service.add(ann()).await.unwrap();
        service.delete_by_id(a.id.unwrap()).await.unwrap();

        let err = service
            .add(Customer::new("Cam Doe", "ann@x.com", None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateField {
                field: UniqueField::Email,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_lifecycle_example() {
        let service = service();

        let a = service.add(ann()).await.unwrap();
        assert_eq!(a.id, Some(1));

        let err = service
            .add(Customer::new("Bo Kim", "ann@x.com", Some("+15555678".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::DuplicateField {
                field: UniqueField::Email,
                ..
            }
        ));

        service.delete_by_id(1).await.unwrap();
        assert!(service.find_active_by_id(1).await.unwrap().is_none());

        service.delete_by_id(1).await.unwrap(); // no error
    }
}
