use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{notification::ErrorCollector, rules};

const FIELD: &str = "companyName";
const MAX_CHARS: usize = 50;

/// Name of an employer, shared by careers and the projects done there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(errors: &mut ErrorCollector, value: impl Into<String>) -> Self {
        let name = Self::reconstruct(value);
        name.validate(errors);
        name
    }

    #[must_use]
    pub fn reconstruct(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn validate(&self, errors: &mut ErrorCollector) {
        rules::required_text(errors, FIELD, "company name", &self.0, MAX_CHARS);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_company_name() {
        let mut errors = ErrorCollector::new();
        let name = CompanyName::new(&mut errors, "株式会社ABC");
        assert!(!errors.has_errors());
        assert_eq!(name.as_str(), "株式会社ABC");
    }

    #[test]
    fn test_blank_company_name() {
        let mut errors = ErrorCollector::new();
        let name = CompanyName::new(&mut errors, "  ");
        assert_eq!(errors.messages("companyName"), ["company name is required"]);
        assert_eq!(name.as_str(), "  ");
    }

    #[test]
    fn test_company_name_too_long() {
        let mut errors = ErrorCollector::new();
        CompanyName::new(&mut errors, "a".repeat(51));
        assert_eq!(
            errors.messages("companyName"),
            ["company name must be 50 characters or fewer"]
        );

        let mut errors = ErrorCollector::new();
        CompanyName::new(&mut errors, "a".repeat(50));
        assert!(!errors.has_errors());
    }
}
