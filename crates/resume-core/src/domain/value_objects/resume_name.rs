use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{notification::ErrorCollector, rules};

const FIELD: &str = "name";
const MAX_CHARS: usize = 50;

/// Characters rejected because the name doubles as an export file name.
const FORBIDDEN: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Display name of a resume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeName(String);

impl ResumeName {
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
        if !rules::required(errors, FIELD, "resume name", &self.0) {
            return;
        }
        rules::max_chars(errors, FIELD, "resume name", &self.0, MAX_CHARS);

        if self.0.contains(FORBIDDEN) {
            errors.add_error(
                FIELD,
                r#"resume name must not contain any of \ / : * ? " < > |"#,
            );
        }
        if self.0.starts_with('.') || self.0.ends_with('.') {
            errors.add_error(FIELD, "resume name must not start or end with a dot");
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResumeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
