//! # Validation Module
//!
//! Input validation helpers for caller-constructed entities.
//!
//! The state layer itself never validates (create appends whatever the
//! caller built); these checks run at entity-construction time, before a
//! record reaches a store.
//!
//! ## Usage
//! ```rust
//! use meridian_core::validation::{validate_entity_id, validate_quantity};
//!
//! validate_entity_id("ORD-100").unwrap();
//! validate_quantity(3).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_ID_LENGTH, MAX_LINE_QUANTITY, MAX_NAME_LENGTH};

// =============================================================================
// Id Validators
// =============================================================================

/// Validates a caller-assigned entity id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 64 characters
///
/// ## Example
/// ```rust
/// use meridian_core::validation::validate_entity_id;
///
/// assert!(validate_entity_id("ORD-100").is_ok());
/// assert!(validate_entity_id("").is_err());
/// ```
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity (1..=999).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: "quantity".to_string(),
            value: quantity,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (product, customer, category).
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_display_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
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
    fn test_validate_entity_id() {
        assert!(validate_entity_id("ORD-100").is_ok());
        assert!(validate_entity_id("  ").is_err());
        assert!(validate_entity_id(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_display_name() {
        assert!(validate_display_name("Walnut Desk Organizer").is_ok());
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name(&"n".repeat(201)).is_err());
    }
}
