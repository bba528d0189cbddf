//! Layout of a single month on a Monday-first weekly grid.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::{MonthIndex, Year};

/// Fallback month length, never reached for validated years.
const LONGEST_MONTH: u8 = 31;

/// Derived layout data for one calendar month.
///
/// Both `days_in_month` and `first_day_offset` are fully determined by
/// `(year, month_index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthMetadata {
    year:             Year,
    month_index:      MonthIndex,
    days_in_month:    u8,
    first_day_offset: u8,
}

impl MonthMetadata {
    /// Computes the layout of `month_index` in `year`.
    pub fn build(year: Year, month_index: MonthIndex) -> Self {
        let first = year.first_day_of(month_index);
        Self {
            year,
            month_index,
            days_in_month: days_in_month(first),
            // Sunday-first weekday remapped onto Monday=0 .. Sunday=6
            first_day_offset: first.weekday().num_days_from_monday() as u8,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month_index(&self) -> MonthIndex {
        self.month_index
    }

    /// Calendar month as a chrono value
    pub const fn month(&self) -> chrono::Month {
        self.month_index.month()
    }

    /// Number of days in the month (28..=31)
    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Column of day 1 in a Monday-first week (0..=6)
    pub const fn first_day_offset(&self) -> u8 {
        self.first_day_offset
    }

    /// Grid position one past the last day of the month
    pub const fn stopping_index(&self) -> usize {
        self.first_day_offset as usize + self.days_in_month as usize
    }

    /// Checks whether grid position `index` holds a day of this month
    pub const fn is_in_month(&self, index: usize) -> bool {
        index >= self.first_day_offset as usize && index < self.stopping_index()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.year.first_day_of(self.month_index)
    }

    pub fn last_day(&self) -> NaiveDate {
        let first = self.first_day();
        first
            .with_day(u32::from(self.days_in_month))
            .unwrap_or(first)
    }
}

/// Get the amount of days in the month starting at `first`
fn days_in_month(first: NaiveDate) -> u8 {
    first
        .checked_add_months(Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days())
        .and_then(|days| u8::try_from(days).ok())
        .unwrap_or(LONGEST_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{month_index, naive, year};

    #[test]
    fn test_build_known_months() {
        struct TestCase {
            year:        u16,
            month_index: u8,
            days:        u8,
            offset:      u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2022,
                month_index: 8,
                days:        30,
                offset:      3,
                description: "September 2022 starts on a Thursday",
            },
            TestCase {
                year:        2022,
                month_index: 11,
                days:        31,
                offset:      3,
                description: "December 2022 starts on a Thursday",
            },
            TestCase {
                year:        2023,
                month_index: 0,
                days:        31,
                offset:      6,
                description: "January 2023 starts on a Sunday",
            },
            TestCase {
                year:        2023,
                month_index: 1,
                days:        28,
                offset:      2,
                description: "February 2023 starts on a Wednesday",
            },
            TestCase {
                year:        2024,
                month_index: 1,
                days:        29,
                offset:      3,
                description: "February 2024 is a leap February",
            },
            TestCase {
                year:        2023,
                month_index: 4,
                days:        31,
                offset:      0,
                description: "May 2023 starts on a Monday",
            },
            TestCase {
                year:        2023,
                month_index: 6,
                days:        31,
                offset:      5,
                description: "July 2023 starts on a Saturday",
            },
            TestCase {
                year:        1900,
                month_index: 1,
                days:        28,
                offset:      3,
                description: "century year that is not a leap year",
            },
        ];

        for case in &cases {
            let meta = MonthMetadata::build(year(case.year), month_index(case.month_index));
            assert_eq!(meta.days_in_month(), case.days, "days: {}", case.description);
            assert_eq!(meta.first_day_offset(), case.offset, "offset: {}", case.description);
        }
    }

    #[test]
    fn test_every_month_is_within_bounds() {
        for y in [1999, 2000, 2022, 2023, 2024, 2100] {
            for m in 0..12 {
                let meta = MonthMetadata::build(year(y), month_index(m));
                assert!(meta.first_day_offset() <= 6, "{y}-{m}: offset out of range");
                assert!(
                    (28..=31).contains(&meta.days_in_month()),
                    "{y}-{m}: {} days",
                    meta.days_in_month()
                );
            }
        }
    }

    #[test]
    fn test_offset_matches_weekday_of_first_day() {
        for m in 0..12 {
            let meta = MonthMetadata::build(year(2023), month_index(m));
            let weekday = meta.first_day().weekday();
            assert_eq!(u32::from(meta.first_day_offset()), weekday.num_days_from_monday());
        }
    }

    #[test]
    fn test_first_and_last_day() {
        let meta = MonthMetadata::build(year(2022), month_index(11));
        assert_eq!(meta.first_day(), naive(2022, 12, 1));
        assert_eq!(meta.last_day(), naive(2022, 12, 31));
        assert_eq!(meta.month(), chrono::Month::December);
    }

    #[test]
    fn test_in_month_window() {
        // September 2022: Thursday start, 30 days
        let meta = MonthMetadata::build(year(2022), month_index(8));
        assert_eq!(meta.stopping_index(), 33);

        assert!(!meta.is_in_month(2));
        assert!(meta.is_in_month(3));
        assert!(meta.is_in_month(32));
        assert!(!meta.is_in_month(33));
    }
}
