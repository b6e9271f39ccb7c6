use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::notification::ErrorCollector;

const FIELD: &str = "link";

/// An absolute `https` URL.
///
/// The raw text is kept as given; parsing only decides validity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Link(String);

impl Link {
    pub fn new(errors: &mut ErrorCollector, value: impl Into<String>) -> Self {
        let link = Self::reconstruct(value);
        link.validate(errors);
        link
    }

    #[must_use]
    pub fn reconstruct(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn validate(&self, errors: &mut ErrorCollector) {
        if self.parsed().is_none() {
            errors.add_error(FIELD, "link must be a valid https URL");
        }
    }

    /// The parsed URL, if the raw text is an absolute `https` URL.
    ///
    /// `Url` lower-cases the scheme, so `HTTPS://` is accepted.
    #[must_use]
    pub fn parsed(&self) -> Option<Url> {
        Url::parse(self.0.trim())
            .ok()
            .filter(|url| url.scheme() == "https" && url.has_host())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
