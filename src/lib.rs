mod academic_year;
mod calendar;
mod config;
mod consts;
mod holiday;
mod month;
mod prelude;
mod range;
mod render;
mod surface;
mod types;

#[cfg(test)]
mod test_utils;

pub use academic_year::AcademicYear;
pub use calendar::AcademicCalendar;
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use holiday::{HolidayCalendar, is_school_holiday};
pub use month::MonthMetadata;
pub use range::{HolidayRange, RangeError};
pub use render::{DateCursor, MonthReport, RenderReport, Renderer};
pub use surface::{DayCell, GridCell, GridSurface, RenderSurface};
pub use types::{MonthIndex, Tag, Year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A concrete, date-only calendar day.
///
/// Holiday data is written as month-first literals (`MM/DD/YYYY`); this type
/// parses, displays and serializes in that format. There is no time of day,
/// so comparisons are always whole-day comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
#[display(fmt = "{:02}/{:02}/{:04}", "_0.month()", "_0.day()", "_0.year()")]
pub struct CalendarDate(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {}", _0)]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", _0, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-12)", _0)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-11)", _0)]
    InvalidMonthIndex(u8),
    #[display(fmt = "Invalid day {:02} for month {:04}-{:02}", day, year, month)]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns a `ParseError` naming the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        if month == 0 || month > 12 {
            return Err(ParseError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(i32::from(year.get()), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                month,
                day,
                year: year.get(),
            })
    }

    /// Returns the wrapped chrono date
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    /// Accepts a chrono date only if its year is within `1..=MAX_YEAR`, so
    /// every `CalendarDate` displays as a literal that parses back.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidFormat(format!("year {} out of range", date.year())))?;
        Year::new(year)?;
        Ok(Self(date))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses a month-first `MM/DD/YYYY` literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed
            .split(MONTH_FIRST_SEPARATOR)
            .map(str::trim)
            .collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected MM{sep}DD{sep}YYYY, found {} {sep} separators in {trimmed}",
                parts.len() - 1,
                sep = MONTH_FIRST_SEPARATOR,
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let month = Self::parse_u8(parts[0])?;
        let day = Self::parse_u8(parts[1])?;
        let year = Self::parse_u16(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
