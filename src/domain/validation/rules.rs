//! Reusable field rules. Each rule reports at most one error per field.

use super::{ValidationError, ValidationHandler};
use crate::domain::DomainError;

pub const REQUIRED_CODE: &str = "required";
pub const LENGTH_CODE: &str = "length";
pub const RANGE_CODE: &str = "range";
pub const REFERENCE_CODE: &str = "reference";

/// Blank (after trim) fails with `required`; otherwise the trimmed length
/// must fall in `min..=max`.
pub fn required_text(
    handler: &mut dyn ValidationHandler,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return handler.append(ValidationError::new(
            REQUIRED_CODE,
            format!("{} must not be empty", field),
        ));
    }
    let len = trimmed.chars().count();
    if len < min || len > max {
        return handler.append(ValidationError::new(
            LENGTH_CODE,
            format!("{} must be between {} and {} characters", field, min, max),
        ));
    }
    Ok(())
}

pub fn in_range(
    handler: &mut dyn ValidationHandler,
    field: &str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), DomainError> {
    if value < min || value > max {
        return handler.append(ValidationError::new(
            RANGE_CODE,
            format!("{} must be between {} and {}", field, min, max),
        ));
    }
    Ok(())
}

/// One `reference` error listing every missing id, or nothing.
pub fn all_present<I: ToString>(
    handler: &mut dyn ValidationHandler,
    what: &str,
    missing: &[I],
) -> Result<(), DomainError> {
    if missing.is_empty() {
        return Ok(());
    }
    let ids = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    handler.append(ValidationError::new(
        REFERENCE_CODE,
        format!("some {} could not be found: {}", what, ids),
    ))
}
