//! Year-month granularity dates.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from building a [`YearMonth`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YearMonthError {
    #[error("invalid year-month format: '{0}' (expected YYYY-MM)")]
    InvalidFormat(String),

    #[error("month out of range: {0}")]
    MonthOutOfRange(u32),

    #[error("year out of range: {0}")]
    YearOutOfRange(i32),
}

/// A calendar month, ordered chronologically.
///
/// Stored as the first day of the month so comparisons reuse `NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// # Errors
    ///
    /// Returns `YearMonthError::MonthOutOfRange` unless `1 <= month <= 12`,
    /// `YearMonthError::YearOutOfRange` if chrono cannot represent the year.
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError::MonthOutOfRange(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(YearMonthError::YearOutOfRange(year))
    }

    /// Parse `YYYY-MM`.
    ///
    /// # Errors
    ///
    /// Returns `YearMonthError::InvalidFormat` for anything else.
    pub fn parse(value: &str) -> Result<Self, YearMonthError> {
        let value = value.trim();
        let invalid = || YearMonthError::InvalidFormat(value.to_string());

        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// The month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
