//! Validated date-of-birth value object.
//!
//! [`BirthDate`] is the single place where a `YYYY-MM-DD` string becomes a
//! calendar date. Request validation and the service layer both go through
//! [`BirthDate::from_str`], so they can never disagree on what is valid.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;

/// chrono format string for the wire representation of dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable format shown in validation messages.
pub const DATE_FORMAT_HINT: &str = "YYYY-MM-DD";

/// chrono alone accepts unpadded months/days and signed years.
static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Rejection of a date-of-birth string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{input}', expected {DATE_FORMAT_HINT}")]
pub struct InvalidBirthDate {
    pub input: String,
}

/// A calendar date of birth with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Age in whole years on `today`.
    ///
    /// Compares day-of-year rather than month/day, so across leap-year
    /// boundaries the birthday can be counted one day early or late. A date
    /// after `today` yields 0.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut years = today.year() - self.0.year();

        if today.ordinal() < self.0.ordinal() {
            years -= 1;
        }

        u32::try_from(years).unwrap_or(0)
    }

    /// Age in whole years as of the current UTC date.
    pub fn age(&self) -> u32 {
        self.age_on(Utc::now().date_naive())
    }
}

impl FromStr for BirthDate {
    type Err = InvalidBirthDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidBirthDate {
            input: s.to_string(),
        };

        if !DATE_SHAPE_REGEX.is_match(s) {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}
