//! Input validation
//!
//! Domain inputs (`New*` and `*Update`) implement [`validator::Validate`],
//! mostly through the derive. The lifecycle runs that pass before any storage
//! call, so HTTP payload types stay free of validation rules. This module
//! holds the custom checks the derives refer to, plus helpers for reporting.

use std::borrow::Cow;

use jiff::Timestamp;
use validator::ValidateLength;

pub use validator::{Validate, ValidationError, ValidationErrors};

/// Largest value a `BIGINT` column can hold, for unsigned domain integers.
pub const STORED_INTEGER_MAX: u64 = 9_223_372_036_854_775_807;

fn failure(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Text must contain something other than whitespace.
///
/// # Errors
///
/// Returns a `blank` error for empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("blank", "must not be blank"));
    }

    Ok(())
}

/// Non-blank text of at most `max_chars` characters.
///
/// # Errors
///
/// Returns a `blank` or `length` error.
pub fn bounded_text(value: &str, max_chars: u64) -> Result<(), ValidationError> {
    not_blank(value)?;

    if !value.validate_length(None, Some(max_chars), None) {
        return Err(failure(
            "length",
            format!("must be at most {max_chars} characters"),
        ));
    }

    Ok(())
}

/// `starts_at` strictly before `ends_at`.
///
/// # Errors
///
/// Returns a `window` error for empty or reversed windows.
pub fn ordered_window(starts_at: Timestamp, ends_at: Timestamp) -> Result<(), ValidationError> {
    if starts_at >= ends_at {
        return Err(failure("window", "must end after it starts"));
    }

    Ok(())
}

/// Whether `errors` holds at least one failure for `field`.
#[must_use]
pub fn has_field_error(errors: &ValidationErrors, field: &str) -> bool {
    errors.field_errors().contains_key(field)
}

/// One line per field, sorted by field name: `name: must not be blank; year: ...`.
#[must_use]
pub fn summary(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let messages: Vec<String> = failures
                .iter()
                .map(|failure| {
                    failure
                        .message
                        .as_ref()
                        .map_or_else(|| failure.code.to_string(), ToString::to_string)
                })
                .collect();

            (field.to_string(), messages.join(", "))
        })
        .collect();

    fields.sort();

    fields
        .into_iter()
        .map(|(field, messages)| format!("{field}: {messages}"))
        .collect::<Vec<_>>()
        .join("; ")
}
