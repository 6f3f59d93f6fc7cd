//! Form validation
//!
//! Centralized text length limits and checks run before any request is
//! sent. A failed check becomes inline error text in the view.

use rust_decimal::Decimal;
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu items, supplies, usernames
pub const MAX_NAME_LEN: usize = 200;

/// Line item notes and expense descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Units, categories
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// Upper bound on a single line quantity
pub const MAX_LINE_QUANTITY: u32 = 999;

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Required(String),

    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: String,
        len: usize,
        max: usize,
    },

    #[error("{field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required(field.into())
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Required(field) => field,
            Self::TooLong { field, .. } | Self::Invalid { field, .. } => field,
        }
    }
}

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            len,
            max: max_len,
        });
    }
    Ok(())
}

/// Amount strictly greater than zero
pub fn validate_positive(value: Decimal, field: &str) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

/// Amount zero or greater
pub fn validate_non_negative(value: Decimal, field: &str) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::invalid(field, "must not be negative"));
    }
    Ok(())
}

/// Line quantity in `1..=MAX_LINE_QUANTITY`
pub fn validate_quantity(quantity: u32, field: &str) -> Result<(), ValidationError> {
    if quantity == 0 || quantity > MAX_LINE_QUANTITY {
        return Err(ValidationError::invalid(
            field,
            format!("quantity must be between 1 and {MAX_LINE_QUANTITY}"),
        ));
    }
    Ok(())
}
