use crate::ParseError;
use crate::consts::{
    BANK_HOLIDAY_CLASS, EMPTY_CLASS, MAX_YEAR, MIN_DAY, MONTH_IDS, MONTHS_IN_YEAR,
    SCHOOL_HOLIDAY_CLASS, WEEKEND_CLASS,
};
use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

/// Calendar months indexed by zero-based month number.
const MONTHS: [chrono::Month; MONTHS_IN_YEAR] = [
    chrono::Month::January,
    chrono::Month::February,
    chrono::Month::March,
    chrono::Month::April,
    chrono::Month::May,
    chrono::Month::June,
    chrono::Month::July,
    chrono::Month::August,
    chrono::Month::September,
    chrono::Month::October,
    chrono::Month::November,
    chrono::Month::December,
];

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The year after this one, if it is still within `MAX_YEAR`.
    pub fn next(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// First day of `month` in this year.
    pub fn first_day_of(self, month: MonthIndex) -> NaiveDate {
        // Both components are range-checked on construction, so chrono
        // always accepts them.
        NaiveDate::from_ymd_opt(i32::from(self.get()), month.number(), u32::from(MIN_DAY))
            .unwrap_or_default()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl FromStr for Year {
    type Err = ParseError;

    /// Parses a year label such as `"2022"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let value = trimmed
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based month index guaranteed to be in the range `0..MONTHS_IN_YEAR`
/// (January is 0, December is 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Into)]
#[serde(try_from = "u8", into = "u8")]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// Creates a new `MonthIndex`, validating that it's below `MONTHS_IN_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthIndex` if the value is 12 or more.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if usize::from(value) >= MONTHS_IN_YEAR {
            return Err(ParseError::InvalidMonthIndex(value));
        }
        Ok(Self(value))
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One-based month number, as chrono counts months
    #[inline]
    pub const fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    /// Lowercase English name, used as the month's table id
    pub const fn id(self) -> &'static str {
        MONTH_IDS[self.0 as usize]
    }

    pub const fn month(self) -> chrono::Month {
        MONTHS[self.0 as usize]
    }

    pub const fn from_month(month: chrono::Month) -> Self {
        Self(month.number_from_month() as u8 - 1)
    }

    /// The following month, wrapping December back to January
    pub const fn succ(self) -> Self {
        Self((self.0 + 1) % MONTHS_IN_YEAR as u8)
    }
}

impl TryFrom<u8> for MonthIndex {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<chrono::Month> for MonthIndex {
    fn from(month: chrono::Month) -> Self {
        Self::from_month(month)
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Classification tag carried by a day cell.
///
/// `Display` yields the class name the rendering surface uses for the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    /// Filler cell before the first or after the last day of the month
    #[display(fmt = "{}", EMPTY_CLASS)]
    Empty,
    /// Saturday or Sunday column; set by the surface, only ever cleared here
    #[display(fmt = "{}", WEEKEND_CLASS)]
    Weekend,
    #[display(fmt = "{}", BANK_HOLIDAY_CLASS)]
    BankHoliday,
    #[display(fmt = "{}", SCHOOL_HOLIDAY_CLASS)]
    SchoolHoliday,
}

impl Tag {
    /// Class name of the tag on the rendering surface
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Empty => EMPTY_CLASS,
            Self::Weekend => WEEKEND_CLASS,
            Self::BankHoliday => BANK_HOLIDAY_CLASS,
            Self::SchoolHoliday => SCHOOL_HOLIDAY_CLASS,
        }
    }
}
