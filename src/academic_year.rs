use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::{AUGUST_INDEX, DECEMBER_INDEX, MONTHS_IN_YEAR, SEPTEMBER_INDEX};
use crate::{MonthIndex, MonthMetadata, Year};

/// The September to August span of one academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AcademicYear {
    year_1: Year,
    year_2: Year,
    months: [MonthMetadata; MONTHS_IN_YEAR],
}

impl AcademicYear {
    /// Lays out the span from September of `year_1` to August of `year_2`.
    ///
    /// `year_2` is expected to follow `year_1` directly; `CalendarConfig::build`
    /// enforces it. Any other pair renders dates that do not match the month
    /// grids, which `RenderReport::is_complete` reports as incomplete.
    pub fn new(year_1: Year, year_2: Year) -> Self {
        Self {
            year_1,
            year_2,
            months: Self::months(year_1, year_2),
        }
    }

    /// Month layouts in academic order: September to December of `year_1`,
    /// then January to August of `year_2`.
    pub fn months(year_1: Year, year_2: Year) -> [MonthMetadata; MONTHS_IN_YEAR] {
        let mut month = MonthIndex::from_month(chrono::Month::September);
        std::array::from_fn(|_| {
            let meta = MonthMetadata::build(Self::year_of(year_1, year_2, month), month);
            month = month.succ();
            meta
        })
    }

    pub const fn year_1(&self) -> Year {
        self.year_1
    }

    pub const fn year_2(&self) -> Year {
        self.year_2
    }

    /// The twelve month layouts, September first
    pub const fn month_metadata(&self) -> &[MonthMetadata; MONTHS_IN_YEAR] {
        &self.months
    }

    /// Year a month belongs to within this academic year; month labels carry it too
    pub fn label_year(&self, month: MonthIndex) -> Year {
        Self::year_of(self.year_1, self.year_2, month)
    }

    /// 1 September of `year_1`
    pub fn start_date(&self) -> NaiveDate {
        self.months[0].first_day()
    }

    /// 31 August of `year_2`
    pub fn end_date(&self) -> NaiveDate {
        self.months[MONTHS_IN_YEAR - 1].last_day()
    }

    /// Days covered, 365 or 366
    pub fn len_days(&self) -> u32 {
        self.months.iter().map(|m| u32::from(m.days_in_month())).sum()
    }

    fn year_of(year_1: Year, year_2: Year, month: MonthIndex) -> Year {
        if (SEPTEMBER_INDEX..=DECEMBER_INDEX).contains(&month.get()) {
            year_1
        } else {
            debug_assert!(month.get() <= AUGUST_INDEX);
            year_2
        }
    }
}
