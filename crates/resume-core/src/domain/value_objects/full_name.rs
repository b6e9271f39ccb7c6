use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{notification::ErrorCollector, rules};

const MAX_CHARS: usize = 50;

/// ASCII letters, hiragana, katakana (including the prolonged sound mark),
/// CJK ideographs and the iteration mark.
const NAME_PATTERN: &str =
    r"^[A-Za-z\x{3041}-\x{309F}\x{30A0}-\x{30FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{3005}]+$";

fn name_regex() -> Option<&'static Regex> {
    static NAME_RE: OnceLock<Option<Regex>> = OnceLock::new();
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).ok()).as_ref()
}

/// The resume owner's family and given name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    last_name: String,
    first_name: String,
}

impl FullName {
    pub fn new(
        errors: &mut ErrorCollector,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        let name = Self::reconstruct(last_name, first_name);
        name.validate(errors);
        name
    }

    #[must_use]
    pub fn reconstruct(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
        }
    }

    pub(crate) fn validate(&self, errors: &mut ErrorCollector) {
        validate_part(errors, "lastName", "last name", &self.last_name);
        validate_part(errors, "firstName", "first name", &self.first_name);
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }
}

fn validate_part(errors: &mut ErrorCollector, field: &str, label: &str, value: &str) {
    if !rules::required(errors, field, label, value) {
        return;
    }
    rules::max_chars(errors, field, label, value, MAX_CHARS);

    if !name_regex().is_some_and(|re| re.is_match(value)) {
        errors.add_error(
            field,
            format!("{label} may only contain letters, hiragana, katakana or kanji"),
        );
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.last_name, self.first_name)
    }
}
