//! Career entity: one employment span at one company.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use crate::domain::{
    identifiers::CareerId,
    notification::ErrorCollector,
    value_objects::{CompanyName, Period, YearMonth},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Career {
    id: CareerId,
    company_name: CompanyName,
    period: Period,
}

impl Career {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a career with a fresh identity.
    ///
    /// Always returns the career; broken rules are recorded in `errors`.
    pub fn create(
        errors: &mut ErrorCollector,
        company_name: impl Into<String>,
        start: YearMonth,
        end: Option<YearMonth>,
        active: bool,
    ) -> Self {
        let career = Self::reconstruct(
            CareerId::generate(),
            CompanyName::reconstruct(company_name),
            Period::reconstruct(start, end, active),
        );
        career.validate(errors);
        career
    }

    /// Rehydrate a stored career without validation.
    #[must_use]
    pub const fn reconstruct(id: CareerId, company_name: CompanyName, period: Period) -> Self {
        Self {
            id,
            company_name,
            period,
        }
    }

    fn validate(&self, errors: &mut ErrorCollector) {
        self.company_name.validate(errors);
        self.period.validate(errors);
    }

    // ========================================================================
    // CHANGE METHODS
    // ========================================================================

    pub fn change_company_name(
        &self,
        errors: &mut ErrorCollector,
        company_name: impl Into<String>,
    ) -> Self {
        let changed = Self {
            company_name: CompanyName::reconstruct(company_name),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    pub fn change_period(
        &self,
        errors: &mut ErrorCollector,
        start: YearMonth,
        end: Option<YearMonth>,
        active: bool,
    ) -> Self {
        let changed = Self {
            period: Period::reconstruct(start, end, active),
            ..self.clone()
        };
        changed.validate(errors);
        changed
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> CareerId {
        self.id
    }

    #[must_use]
    pub const fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    #[must_use]
    pub const fn period(&self) -> &Period {
        &self.period
    }

    /// Still employed here.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.period.is_active()
    }

    /// Whether this career, as a candidate, conflicts with `other`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.period.overlaps(&other.period)
    }
}
