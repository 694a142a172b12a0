//! Input validation helpers
//!
//! Centralized text length constants and field checks shared by every
//! entity form. Validation is field-level only: required, numeric range,
//! max length.

use rust_decimal::Decimal;

use crate::error::ValidationError;

// ── Text length limits ──────────────────────────────────────────────

/// Person and product names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and order notes
pub const MAX_NOTE_LEN: usize = 500;

/// CPF digits (unformatted)
pub const MAX_CPF_LEN: usize = 11;

/// Staff codes: matricula, caixa codigo
pub const MAX_CODE_LEN: usize = 20;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Field checks ────────────────────────────────────────────────────

/// Required string: non-blank and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &'static str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    check_len(value, field, max_len)
}

/// Optional string: when present, within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &'static str,
    max_len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Optional CPF: digits only, at most 11 of them.
pub fn validate_cpf(value: &Option<String>) -> Result<(), ValidationError> {
    let Some(cpf) = value.as_deref().filter(|v| !v.is_empty()) else {
        return Ok(());
    };
    if !cpf.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("cpf", "must contain digits only"));
    }
    check_len(cpf, "cpf", MAX_CPF_LEN)
}

/// Required email with a plausible `local@domain` shape.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::new("email", "is not a valid address")),
    }
}

/// Decimal amount that must not be negative.
pub fn validate_non_negative(value: Decimal, field: &'static str) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::new(field, "must be zero or greater"));
    }
    Ok(())
}

fn check_len(value: &str, field: &'static str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::new(
            field,
            format!("is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}
