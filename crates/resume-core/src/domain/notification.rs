//! Accumulating validation sink.
//!
//! An [`ErrorCollector`] is handed by mutable reference to every value-object
//! and entity factory. Factories append messages keyed by field name and keep
//! going, so a single request can report every problem at once.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Field-keyed collection of validation messages.
///
/// Appending never fails. Messages for a field keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollector {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorCollector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Append a message for `field`.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Whether any field has at least one message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|messages| !messages.is_empty())
    }

    /// The full field -> messages mapping.
    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded for one field (empty if none).
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Total number of messages across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_errors()
    }

    /// Append every message from `other`, preserving per-field order.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    /// Freeze the current contents into an immutable snapshot.
    #[must_use]
    pub fn to_validation_errors(&self) -> ValidationErrors {
        ValidationErrors(self.errors.clone())
    }

    #[must_use]
    pub fn into_errors(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

/// Immutable snapshot of an [`ErrorCollector`], carried by
/// [`ResumeError::Validation`](crate::ResumeError::Validation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.0
    }

    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Fields that carry at least one message.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| field.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field}: {m}")))
            .join("; ");
        f.write_str(&rendered)
    }
}

impl From<ErrorCollector> for ValidationErrors {
    fn from(collector: ErrorCollector) -> Self {
        Self(collector.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector_is_empty() {
        let errors = ErrorCollector::new();
        assert!(!errors.has_errors());
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(errors.messages("anything").is_empty());
    }

    #[test]
    fn test_add_error_keeps_order_per_field() {
        let mut errors = ErrorCollector::new();
        errors.add_error("name", "first");
        errors.add_error("link", "bad");
        errors.add_error("name", "second");

        assert!(errors.has_errors());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.messages("name"), ["first", "second"]);
        assert_eq!(errors.messages("link"), ["bad"]);
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_merge_appends() {
        let mut left = ErrorCollector::new();
        left.add_error("name", "a");
        let mut right = ErrorCollector::new();
        right.add_error("name", "b");
        right.add_error("role", "c");

        left.merge(right);

        assert_eq!(left.messages("name"), ["a", "b"]);
        assert_eq!(left.messages("role"), ["c"]);
    }

    #[test]
    fn test_validation_errors_display_and_serde() {
        let mut errors = ErrorCollector::new();
        errors.add_error("endDate", "end date must be after start date");
        errors.add_error("companyName", "company name is required");
        let frozen = errors.to_validation_errors();

        assert_eq!(
            frozen.to_string(),
            "companyName: company name is required; endDate: end date must be after start date"
        );
        assert_eq!(frozen.fields().collect::<Vec<_>>(), ["companyName", "endDate"]);

        let json = serde_json::to_value(&frozen).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "companyName": ["company name is required"],
                "endDate": ["end date must be after start date"],
            })
        );
    }

    #[test]
    fn test_into_validation_errors() {
        let mut errors = ErrorCollector::new();
        errors.add_error("title", "title is required");
        let frozen = ValidationErrors::from(errors.clone());
        assert_eq!(frozen.as_map(), errors.errors());
        assert_eq!(errors.into_errors().len(), 1);
    }
}
