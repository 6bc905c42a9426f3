//! # Domain Types
//!
//! The Customer record and the payload types that feed it.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Customer Lifecycle                             │
//! │                                                                     │
//! │  CustomerDraft ──► Customer { id: None, is_active: true }           │
//! │        │                 │                                          │
//! │        │ service.add     ▼                                          │
//! │        └──────────► Customer { id: Some(n), created set }           │
//! │                          │                                          │
//! │      merge(existing, patch) + service.update                        │
//! │                          ▼                                          │
//! │                     Customer { updated refreshed }                  │
//! │                          │                                          │
//! │      service.delete_by_id (one-way, never reverted here)            │
//! │                          ▼                                          │
//! │                     Customer { is_active: false }                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

// =============================================================================
// Customer
// =============================================================================

/// A customer record.
///
/// Full name, email, and phone each carry a uniqueness rule that holds
/// across ALL customers, active or inactive. The uniqueness rules are
/// enforced by the service, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Identifier assigned by the store on first save.
    /// `None` for a record that has never been persisted.
    pub id: Option<i64>,

    /// The customer's full name. Unique, case-sensitive exact match.
    pub full_name: String,

    /// The customer's email address. Unique.
    pub email: String,

    /// The customer's phone number, `+` followed by digits.
    /// Optional; unique when present.
    pub phone: Option<String>,

    /// Soft-delete flag. `true` on creation, flipped to `false` by
    /// delete and never back by this crate.
    pub is_active: bool,

    /// Creation time as Unix epoch seconds. Set once, never mutated.
    pub created: i64,

    /// Last update time as Unix epoch seconds. `None` until the first
    /// successful update.
    pub updated: Option<i64>,
}

impl Customer {
    /// Creates a fresh, never-persisted customer record.
    ///
    /// The record has no id (the store assigns one on save), is active,
    /// stamps `created` with the current time, and has no `updated`
    /// timestamp yet.
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Customer {
            id: None,
            full_name: full_name.into(),
            email: email.into(),
            phone,
            is_active: true,
            created: Utc::now().timestamp(),
            updated: None,
        }
    }
}

// =============================================================================
// Creation Payload
// =============================================================================

/// The payload for creating a new customer.
///
/// Carries only the caller-suppliable fields; id, timestamps, and the
/// active flag are owned by the record lifecycle. Validate with
/// [`crate::validation::validate_draft`] before converting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl CustomerDraft {
    /// Converts the draft into a fresh [`Customer`] record.
    pub fn into_customer(self) -> Customer {
        Customer::new(self.full_name, self.email, self.phone)
    }
}

// =============================================================================
// Partial-Update Payload
// =============================================================================

/// The payload for partially updating an existing customer.
///
/// Every field is optional: a present field replaces the existing
/// value, an absent field leaves it untouched. There is no way to
/// clear the phone through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Merges a patch onto an existing record, field by field.
///
/// Pure function: the result is a new record, the inputs are untouched.
/// Identity, the active flag, and both timestamps always come from the
/// existing record; the service refreshes `updated` when it persists
/// the merged result.
///
/// ## Example
/// ```rust
/// use customer_core::types::{merge, Customer, CustomerPatch};
///
/// let existing = Customer::new("Ann Lee", "ann@x.com", None);
/// let patch = CustomerPatch {
///     full_name: None,
///     email: Some("ann.lee@x.com".to_string()),
///     phone: None,
/// };
///
/// let merged = merge(&existing, &patch);
/// assert_eq!(merged.full_name, "Ann Lee");
/// assert_eq!(merged.email, "ann.lee@x.com");
/// ```
pub fn merge(existing: &Customer, patch: &CustomerPatch) -> Customer {
    Customer {
        id: existing.id,
        full_name: patch
            .full_name
            .clone()
            .unwrap_or_else(|| existing.full_name.clone()),
        email: patch.email.clone().unwrap_or_else(|| existing.email.clone()),
        phone: patch.phone.clone().or_else(|| existing.phone.clone()),
        is_active: existing.is_active,
        created: existing.created,
        updated: existing.updated,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_defaults() {
        let customer = Customer::new("Ann Lee", "ann@x.com", Some("+15551234".to_string()));

        assert_eq!(customer.id, None);
        assert!(customer.is_active);
        assert!(customer.created > 0);
        assert_eq!(customer.updated, None);
    }

    #[test]
    fn test_draft_into_customer() {
        let draft = CustomerDraft {
            full_name: "Bo Kim".to_string(),
            email: "bo@x.com".to_string(),
            phone: None,
        };

        let customer = draft.into_customer();
        assert_eq!(customer.full_name, "Bo Kim");
        assert_eq!(customer.email, "bo@x.com");
        assert_eq!(customer.phone, None);
        assert_eq!(customer.id, None);
    }

    #[test]
    fn test_merge_replaces_present_fields() {
        let existing = Customer {
            id: Some(7),
            full_name: "Ann Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: Some("+15551234".to_string()),
            is_active: true,
            created: 1_700_000_000,
            updated: Some(1_700_000_100),
        };
        let patch = CustomerPatch {
            full_name: Some("Ann Lee-Park".to_string()),
            email: None,
            phone: Some("+15559999".to_string()),
        };

        let merged = merge(&existing, &patch);

        assert_eq!(merged.id, Some(7));
        assert_eq!(merged.full_name, "Ann Lee-Park");
        assert_eq!(merged.email, "ann@x.com");
        assert_eq!(merged.phone, Some("+15559999".to_string()));
        assert_eq!(merged.created, 1_700_000_000);
        assert_eq!(merged.updated, Some(1_700_000_100));
    }

    #[test]
    fn test_patch_deserializes_with_absent_fields() {
        // A transport sends only the fields it wants changed
        let patch: CustomerPatch = serde_json::from_str(r#"{"email": "ann.lee@x.com"}"#).unwrap();

        assert_eq!(patch.full_name, None);
        assert_eq!(patch.email, Some("ann.lee@x.com".to_string()));
        assert_eq!(patch.phone, None);
    }

    #[test]
    fn test_customer_serializes_roundtrip() {
        let customer = Customer::new("Ann Lee", "ann@x.com", Some("+15551234".to_string()));

        let json = serde_json::to_string(&customer).unwrap();
        let back: Customer = serde_json::from_str(&json).unwrap();

        assert_eq!(back.full_name, customer.full_name);
        assert_eq!(back.email, customer.email);
        assert_eq!(back.phone, customer.phone);
        assert_eq!(back.created, customer.created);
    }

    #[test]
    fn test_merge_empty_patch_is_identity_on_fields() {
        let existing = Customer::new("Ann Lee", "ann@x.com", None);
        let merged = merge(&existing, &CustomerPatch::default());

        assert_eq!(merged.full_name, existing.full_name);
        assert_eq!(merged.email, existing.email);
        assert_eq!(merged.phone, existing.phone);
        assert_eq!(merged.created, existing.created);
    }
}
