//! Field rules shared by value objects and entities.

use super::notification::ErrorCollector;

/// Length in Unicode scalar values.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Record "`label` is required" when `value` is blank.
///
/// Returns whether the value was present.
pub(crate) fn required(errors: &mut ErrorCollector, field: &str, label: &str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.add_error(field, format!("{label} is required"));
        return false;
    }
    true
}

pub(crate) fn max_chars(
    errors: &mut ErrorCollector,
    field: &str,
    label: &str,
    value: &str,
    max: usize,
) {
    if char_len(value) > max {
        errors.add_error(field, format!("{label} must be {max} characters or fewer"));
    }
}

/// Required text capped at `max` characters. A blank value only reports the
/// missing value.
pub(crate) fn required_text(
    errors: &mut ErrorCollector,
    field: &str,
    label: &str,
    value: &str,
    max: usize,
) {
    if required(errors, field, label, value) {
        max_chars(errors, field, label, value, max);
    }
}
