#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use crate::domain::{
    identifiers::CertificationId, notification::ErrorCollector, rules, value_objects::YearMonth,
};

const NAME_MAX: usize = 50;

/// A qualification obtained in a given month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    id: CertificationId,
    name: String,
    date: YearMonth,
}

impl Certification {
    pub fn create(errors: &mut ErrorCollector, name: impl Into<String>, date: YearMonth) -> Self {
        let certification = Self::reconstruct(CertificationId::generate(), name, date);
        certification.validate(errors);
        certification
    }

    #[must_use]
    pub fn reconstruct(id: CertificationId, name: impl Into<String>, date: YearMonth) -> Self {
        Self {
            id,
            name: name.into(),
            date,
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, "name", "certification name", &self.name, NAME_MAX);
    }

    pub fn change_name(&self, errors: &mut ErrorCollector, name: impl Into<String>) -> Self {
        let changed = Self {
            name: name.into(),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    pub fn change_date(&self, errors: &mut ErrorCollector, date: YearMonth) -> Self {
        let changed = Self {
            date,
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    #[must_use]
    pub const fn id(&self) -> CertificationId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn date(&self) -> YearMonth {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(value: &str) -> YearMonth {
        YearMonth::parse(value).expect("valid year-month")
    }

    #[test]
    fn test_create_valid() {
        let mut errors = ErrorCollector::new();
        let cert = Certification::create(&mut errors, "Applied Information Technology", ym("2019-10"));

        assert!(!errors.has_errors());
        assert_eq!(cert.name(), "Applied Information Technology");
        assert_eq!(cert.date(), ym("2019-10"));
    }

    #[test]
    fn test_name_rules() {
        let mut errors = ErrorCollector::new();
        Certification::create(&mut errors, "  ", ym("2019-10"));
        assert_eq!(errors.messages("name"), ["certification name is required"]);

        let mut errors = ErrorCollector::new();
        Certification::create(&mut errors, "あ".repeat(51), ym("2019-10"));
        assert_eq!(
            errors.messages("name"),
            ["certification name must be 50 characters or fewer"]
        );
    }

    #[test]
    fn test_fifty_multibyte_characters_allowed() {
        let mut errors = ErrorCollector::new();
        Certification::create(&mut errors, "資".repeat(50), ym("2019-10"));
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_change_date_revalidates_name() {
        let cert = Certification::reconstruct(CertificationId::generate(), "", ym("2019-10"));
        let mut errors = ErrorCollector::new();

        let changed = cert.change_date(&mut errors, ym("2020-04"));

        assert_eq!(changed.id(), cert.id());
        assert_eq!(changed.date(), ym("2020-04"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_change_name() {
        let mut errors = ErrorCollector::new();
        let cert = Certification::create(&mut errors, "Old", ym("2019-10"));
        let changed = cert.change_name(&mut errors, "New");
        assert!(!errors.has_errors());
        assert_eq!(changed.name(), "New");
        assert_eq!(cert.name(), "Old");
    }
}
