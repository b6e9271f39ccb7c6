//! Employment and engagement periods.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use serde::{Deserialize, Serialize};

use super::YearMonth;
use crate::domain::notification::ErrorCollector;

const END_DATE: &str = "endDate";

/// A span of months that is either closed (`end` present) or still ongoing.
///
/// # Invariants
///
/// 1. `active` implies `end` is absent
/// 2. not `active` implies `end` is present and `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: YearMonth,
    end: Option<YearMonth>,
    active: bool,
}

impl Period {
    /// Build a period, recording every rule it breaks.
    pub fn new(
        errors: &mut ErrorCollector,
        start: YearMonth,
        end: Option<YearMonth>,
        active: bool,
    ) -> Self {
        let period = Self::reconstruct(start, end, active);
        period.validate(errors);
        period
    }

    /// Rehydrate a stored period without validation.
    #[must_use]
    pub const fn reconstruct(start: YearMonth, end: Option<YearMonth>, active: bool) -> Self {
        Self { start, end, active }
    }

    /// Closed period ending at `end`.
    pub fn closed(errors: &mut ErrorCollector, start: YearMonth, end: YearMonth) -> Self {
        Self::new(errors, start, Some(end), false)
    }

    /// Ongoing period starting at `start`.
    pub fn ongoing(errors: &mut ErrorCollector, start: YearMonth) -> Self {
        Self::new(errors, start, None, true)
    }

    pub(crate) fn validate(&self, errors: &mut ErrorCollector) {
        if let Some(end) = self.end {
            if end < self.start {
                errors.add_error(END_DATE, "end date must be after start date");
            }
        }

        match (self.active, self.end) {
            (true, Some(_)) => {
                errors.add_error(END_DATE, "end date cannot be set while the period is ongoing");
            }
            (false, None) => {
                errors.add_error(END_DATE, "end date is required unless the period is ongoing");
            }
            _ => {}
        }
    }

    #[must_use]
    pub const fn start(&self) -> YearMonth {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Option<YearMonth> {
        self.end
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the two periods share at least one month.
    ///
    /// Ongoing periods are open-ended: two ongoing periods always overlap,
    /// and an ongoing period overlaps every period that does not start
    /// strictly before it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.active, other.active) {
            (true, true) => true,
            (true, false) => other.start >= self.start,
            (false, true) => self.start >= other.start,
            (false, false) => match (self.end, other.end) {
                (Some(end), Some(other_end)) => other_end >= self.start && other.start <= end,
                // Closed periods always carry an end; a missing one is
                // treated as ongoing from its start.
                (None, _) | (_, None) => Self::reconstruct(self.start, self.end, self.end.is_none())
                    .overlaps(&Self::reconstruct(other.start, other.end, other.end.is_none())),
            },
        }
    }
}
