//! Cross-entity rules of the resume aggregate.
//!
//! Both checks are single linear scans. They only record into the
//! collector; the aggregate decides whether to fail.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use itertools::Itertools;

use crate::domain::{
    entities::{Career, Project},
    notification::ErrorCollector,
};

pub(crate) const CAREER_FIELD: &str = "career";
pub(crate) const COMPANY_FIELD: &str = "companyName";

/// Record one error if `candidate` conflicts with any of `others`.
///
/// Entries sharing the candidate's identity are skipped, so an update
/// replaces the stored career instead of competing with it.
pub(crate) fn check_career_overlap<'a>(
    errors: &mut ErrorCollector,
    candidate: &Career,
    others: impl IntoIterator<Item = &'a Career>,
) {
    let conflicting = others
        .into_iter()
        .filter(|other| other.id() != candidate.id())
        .filter(|other| candidate.overlaps(other))
        .map(|other| format!("\"{}\"", other.company_name()))
        .join(", ");

    if !conflicting.is_empty() {
        errors.add_error(
            CAREER_FIELD,
            format!(
                "employment period for \"{}\" overlaps with existing careers: {conflicting}",
                candidate.company_name()
            ),
        );
    }
}

/// Record one error unless some career is at the project's company.
pub(crate) fn check_project_company<'a>(
    errors: &mut ErrorCollector,
    project: &Project,
    careers: impl IntoIterator<Item = &'a Career>,
) {
    let known = careers
        .into_iter()
        .any(|career| career.company_name() == project.company_name());

    if !known {
        errors.add_error(
            COMPANY_FIELD,
            format!(
                "company \"{}\" does not match any career",
                project.company_name()
            ),
        );
    }
}
