//! Bank and school holiday lookup.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{CalendarDate, HolidayRange, Tag};

/// Checks whether `date` falls inside any of `ranges`, bounds included.
pub fn is_school_holiday(date: NaiveDate, ranges: &[HolidayRange]) -> bool {
    ranges.iter().any(|range| range.contains(date))
}

/// The holiday data of one academic year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    bank_holidays:   BTreeSet<NaiveDate>,
    school_holidays: Vec<HolidayRange>,
}

impl HolidayCalendar {
    pub fn new<B, S>(bank_holidays: B, school_holidays: S) -> Self
    where
        B: IntoIterator<Item = CalendarDate>,
        S: IntoIterator<Item = HolidayRange>,
    {
        Self {
            bank_holidays:   bank_holidays.into_iter().map(CalendarDate::naive).collect(),
            school_holidays: school_holidays.into_iter().collect(),
        }
    }

    /// Exact single-day match against the bank holiday set
    pub fn is_bank_holiday(&self, date: NaiveDate) -> bool {
        self.bank_holidays.contains(&date)
    }

    pub fn is_school_holiday(&self, date: NaiveDate) -> bool {
        is_school_holiday(date, &self.school_holidays)
    }

    /// Tag for an in-month day, given whether its cell is already marked weekend.
    ///
    /// A bank holiday wins over everything and is tagged even on a weekend.
    /// Weekend cells never receive the school holiday tag.
    pub fn classify(&self, date: NaiveDate, is_weekend: bool) -> Option<Tag> {
        if self.is_bank_holiday(date) {
            Some(Tag::BankHoliday)
        } else if !is_weekend && self.is_school_holiday(date) {
            Some(Tag::SchoolHoliday)
        } else {
            None
        }
    }

    pub fn bank_holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bank_holidays.iter().copied()
    }

    pub fn school_holidays(&self) -> &[HolidayRange] {
        &self.school_holidays
    }
}
