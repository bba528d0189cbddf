//! Shared constructors for unit tests.

use chrono::NaiveDate;

use crate::{CalendarDate, HolidayRange, MonthIndex, Year};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("test date must be valid")
}

pub fn naive(year: u16, month: u8, day: u8) -> NaiveDate {
    date(year, month, day).naive()
}

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year must be valid")
}

pub fn month_index(value: u8) -> MonthIndex {
    MonthIndex::new(value).expect("test month index must be valid")
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> HolidayRange {
    HolidayRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .expect("test range must be ordered")
}
