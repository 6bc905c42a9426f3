//! # Validation Module
//!
//! Syntactic field rules for customer payloads.
//!
//! These checks run at the payload boundary (draft and patch types),
//! before a record reaches the service. The service itself enforces
//! only the uniqueness rules; a record that passes validation can still
//! be rejected as a duplicate.
//!
//! ## Usage
//! ```rust
//! use customer_core::validation::{validate_email, validate_phone};
//!
//! validate_email("ann@x.com").unwrap();
//! assert!(validate_phone("+15551234").is_ok());
//! assert!(validate_phone("15551234").is_err());
//! ```

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{CustomerDraft, CustomerPatch};
use crate::{EMAIL_MAX, EMAIL_MIN, FULL_NAME_MAX, FULL_NAME_MIN, PHONE_MAX, PHONE_MIN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a customer's full name.
///
/// ## Rules
/// - Must not be blank
/// - Must be between 2 and 50 characters, whitespace included
///
/// ## Example
/// ```rust
/// use customer_core::validation::validate_full_name;
///
/// assert!(validate_full_name("Ann Lee").is_ok());
/// assert!(validate_full_name("A").is_err());
/// assert!(validate_full_name("").is_err());
/// ```
pub fn validate_full_name(full_name: &str) -> ValidationResult<()> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "full name".to_string(),
        });
    }

    // Length counts characters, not bytes, so accented names measure
    // the way a user would expect
    let len = full_name.chars().count();

    if len < FULL_NAME_MIN {
        return Err(ValidationError::TooShort {
            field: "full name".to_string(),
            min: FULL_NAME_MIN,
        });
    }

    if len > FULL_NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "full name".to_string(),
            max: FULL_NAME_MAX,
        });
    }

    Ok(())
}

/// Validates a customer's email address.
///
/// ## Rules
/// - Must not be blank
/// - Must be between 2 and 100 characters
/// - Must have the shape `local@domain` with no whitespace
///
/// ## Example
/// ```rust
/// use customer_core::validation::validate_email;
///
/// assert!(validate_email("ann@x.com").is_ok());
/// assert!(validate_email("not-an-email").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let len = email.chars().count();

    if len < EMAIL_MIN {
        return Err(ValidationError::TooShort {
            field: "email".to_string(),
            min: EMAIL_MIN,
        });
    }

    if len > EMAIL_MAX {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: EMAIL_MAX,
        });
    }

    let re = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    if !re.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer's phone number.
///
/// ## Rules
/// - Must be between 6 and 14 characters, the leading '+' included
/// - Must start with '+' followed only by digits
///
/// The phone field is optional on the record; call this only for a
/// present value.
///
/// ## Example
/// ```rust
/// use customer_core::validation::validate_phone;
///
/// assert!(validate_phone("+15551234").is_ok());
/// assert!(validate_phone("+123").is_err());
/// assert!(validate_phone("15551234").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let len = phone.chars().count();

    if len < PHONE_MIN {
        return Err(ValidationError::TooShort {
            field: "phone number".to_string(),
            min: PHONE_MIN,
        });
    }

    if len > PHONE_MAX {
        return Err(ValidationError::TooLong {
            field: "phone number".to_string(),
            max: PHONE_MAX,
        });
    }

    let re = Regex::new(r"^\+[0-9]+$").unwrap();
    if !re.is_match(phone) {
        return Err(ValidationError::InvalidFormat {
            field: "phone number".to_string(),
            reason: "must start with '+', followed by digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a creation payload: full name and email are mandatory,
/// phone is checked only when present.
pub fn validate_draft(draft: &CustomerDraft) -> ValidationResult<()> {
    validate_full_name(&draft.full_name)?;
    validate_email(&draft.email)?;

    if let Some(phone) = &draft.phone {
        validate_phone(phone)?;
    }

    Ok(())
}

/// Validates a partial-update payload: every field is optional and
/// checked only when present.
pub fn validate_patch(patch: &CustomerPatch) -> ValidationResult<()> {
    if let Some(full_name) = &patch.full_name {
        validate_full_name(full_name)?;
    }

    if let Some(email) = &patch.email {
        validate_email(email)?;
    }

    if let Some(phone) = &patch.phone {
        validate_phone(phone)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_full_name() {
        // Valid names
        assert!(validate_full_name("Ann Lee").is_ok());
        assert!(validate_full_name("Bo").is_ok());
        assert!(validate_full_name(&"A".repeat(50)).is_ok());

        // Invalid names
        assert!(validate_full_name("").is_err());
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name("A").is_err());
        assert!(validate_full_name(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("a@b").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@signs@x").is_err());
        assert!(validate_email("spaces in@x.com").is_err());
        assert!(validate_email(&format!("{}@x.com", "a".repeat(100))).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+15551234").is_ok());
        assert!(validate_phone("+12345").is_ok()); // 6 chars with '+'
        assert!(validate_phone("+1234567890123").is_ok()); // 14 chars

        assert!(validate_phone("+123").is_err()); // too short
        assert!(validate_phone("+123456789012345").is_err()); // too long
        assert!(validate_phone("15551234").is_err()); // missing '+'
        assert!(validate_phone("+1555-1234").is_err()); // non-digit
    }

    #[test]
    fn test_validate_draft() {
        let draft = CustomerDraft {
            full_name: "Ann Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: None,
        };
        assert!(validate_draft(&draft).is_ok());

        let draft = CustomerDraft {
            full_name: "Ann Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: Some("bad".to_string()),
        };
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn test_validate_patch_skips_absent_fields() {
        assert!(validate_patch(&CustomerPatch::default()).is_ok());

        let patch = CustomerPatch {
            full_name: None,
            email: Some("not-an-email".to_string()),
            phone: None,
        };
        assert!(validate_patch(&patch).is_err());
    }
}
