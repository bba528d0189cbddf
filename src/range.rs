use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ParseError, prelude::*};

/// A closed range of calendar days, inclusive at both ends.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start} - {end}")]
pub struct HolidayRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for holiday range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid holiday range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the bounds.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl HolidayRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from two `MM/DD/YYYY` literals.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if either literal is malformed, or
    /// `RangeError::InvalidRange` if they are out of order.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        Self::new(start.parse()?, end.parse()?)
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Checks whether `date` lies within the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.naive() <= date && date <= self.end.naive()
    }
}

/// Ranges serialize as a two-element array of literals: `["10/24/2022", "10/28/2022"]`.
impl Serialize for HolidayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.start, self.end).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HolidayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, end) = <(CalendarDate, CalendarDate)>::deserialize(deserializer)?;
        Self::new(start, end).map_err(serde::de::Error::custom)
    }
}
