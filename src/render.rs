//! Populates the month grids of a rendering surface.
//!
//! Months are walked in academic order. A single date cursor, starting on
//! 1 September of the first year, moves one day forward for every in-month
//! cell and never for filler cells, so the whole pass is one continuous run of
//! dates regardless of grid offsets.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{AcademicYear, CalendarDate, DayCell, HolidayCalendar, MonthIndex, MonthMetadata, RenderSurface, Tag};

/// The date the next in-month cell will show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    current: NaiveDate,
    last:    Option<NaiveDate>,
    visited: u32,
}

impl DateCursor {
    pub const fn new(start: NaiveDate) -> Self {
        Self {
            current: start,
            last: None,
            visited: 0,
        }
    }

    pub const fn current(&self) -> NaiveDate {
        self.current
    }

    /// Number of days the cursor has moved past
    pub const fn visited(&self) -> u32 {
        self.visited
    }

    /// The most recent date handed to a cell
    pub const fn last_visited(&self) -> Option<NaiveDate> {
        self.last
    }

    fn advance(&mut self) {
        self.last = Some(self.current);
        self.current = self.current.succ_opt().unwrap_or(self.current);
        self.visited += 1;
    }
}

/// What one month's pass did to its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub month:           MonthIndex,
    pub days_rendered:   u8,
    pub empty_cells:     usize,
    pub bank_holidays:   u8,
    pub school_holidays: u8,
}

impl MonthReport {
    const fn new(month: MonthIndex) -> Self {
        Self {
            month,
            days_rendered: 0,
            empty_cells: 0,
            bank_holidays: 0,
            school_holidays: 0,
        }
    }

    fn count(&mut self, tag: Tag) {
        match tag {
            Tag::BankHoliday => self.bank_holidays += 1,
            Tag::SchoolHoliday => self.school_holidays += 1,
            Tag::Empty | Tag::Weekend => {}
        }
    }
}

/// Outcome of a full render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub months:        Vec<MonthReport>,
    pub days_visited:  u32,
    pub expected_days: u32,
    /// Last date shown in a cell; 31 August of the second year after a complete pass
    pub last_date:     Option<CalendarDate>,
    pub end_date:      Option<CalendarDate>,
}

impl RenderReport {
    /// Whether every day of the academic year reached a cell and the run of
    /// dates ended on the academic year's last day
    pub fn is_complete(&self) -> bool {
        self.days_visited == self.expected_days
            && self.last_date.is_some()
            && self.last_date == self.end_date
    }
}

/// Walks an academic year's months over a surface, classifying each day.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    academic_year: &'a AcademicYear,
    holidays:      &'a HolidayCalendar,
}

impl<'a> Renderer<'a> {
    pub const fn new(academic_year: &'a AcademicYear, holidays: &'a HolidayCalendar) -> Self {
        Self {
            academic_year,
            holidays,
        }
    }

    /// Appends the academic year to every month label: the first year for
    /// September to December, the second for January to August.
    pub fn label_months<S: RenderSurface>(&self, surface: &mut S) {
        for meta in self.academic_year.month_metadata() {
            let suffix = format!(" {}", self.academic_year.label_year(meta.month_index()));
            surface.append_to_label(meta.month_index(), &suffix);
        }
    }

    /// Renders all twelve month grids in academic order.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) -> RenderReport {
        let mut cursor = DateCursor::new(self.academic_year.start_date());
        let months = self
            .academic_year
            .month_metadata()
            .iter()
            .map(|meta| self.render_month(meta, surface.cells_mut(meta.month_index()), &mut cursor))
            .collect::<Vec<_>>();

        let report = RenderReport {
            months,
            days_visited: cursor.visited(),
            expected_days: self.academic_year.len_days(),
            last_date: cursor.last_visited().and_then(|date| CalendarDate::try_from(date).ok()),
            end_date: CalendarDate::try_from(self.academic_year.end_date()).ok(),
        };
        info!(
            year_1 = %self.academic_year.year_1(),
            year_2 = %self.academic_year.year_2(),
            days = report.days_visited,
            complete = report.is_complete(),
            "rendered academic year"
        );
        report
    }

    /// Renders one month grid, advancing `cursor` once per in-month cell.
    ///
    /// Cells before the first day or after the last day become empty filler
    /// and lose any weekend mark. A grid shorter than the month's layout
    /// leaves the trailing days unrendered and the cursor behind them.
    pub fn render_month<C: DayCell>(
        &self,
        meta: &MonthMetadata,
        cells: &mut [C],
        cursor: &mut DateCursor,
    ) -> MonthReport {
        let starting_index = usize::from(meta.first_day_offset());
        let stopping_index = meta.stopping_index();
        let mut report = MonthReport::new(meta.month_index());
        let mut counter: u8 = 1;

        for (i, cell) in cells.iter_mut().enumerate() {
            if i < starting_index || i >= stopping_index {
                cell.add_tag(Tag::Empty);
                cell.remove_tag(Tag::Weekend);
                report.empty_cells += 1;
                continue;
            }

            let date = cursor.current();
            cell.set_day_number(counter);
            cell.set_date(date);
            counter += 1;

            if let Some(tag) = self.holidays.classify(date, cell.is_weekend()) {
                cell.add_tag(tag);
                report.count(tag);
            }
            report.days_rendered += 1;
            cursor.advance();
        }

        if cells.len() < stopping_index {
            warn!(
                month = %meta.month_index(),
                cells = cells.len(),
                needed = stopping_index,
                "month grid too short, trailing days not rendered"
            );
        }
        debug!(
            month = %meta.month_index(),
            year = %meta.year(),
            days = report.days_rendered,
            bank_holidays = report.bank_holidays,
            school_holidays = report.school_holidays,
            "rendered month"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FULL_GRID_WIDTH, SHORT_GRID_WIDTH};
    use crate::test_utils::{date, month_index, naive, range, year};
    use crate::{GridCell, GridSurface};

    fn academic_2022() -> AcademicYear {
        AcademicYear::new(year(2022), year(2023))
    }

    fn holidays_2022() -> HolidayCalendar {
        HolidayCalendar::new(
            [date(2022, 12, 26), date(2022, 12, 27), date(2023, 5, 29)],
            [
                range((2022, 10, 24), (2022, 10, 28)),
                range((2022, 12, 19), (2023, 1, 3)),
                range((2023, 5, 29), (2023, 6, 2)),
            ],
        )
    }

    fn weekend_grid(width: usize) -> Vec<GridCell> {
        (0..width).map(|i| GridCell::new(i % 7 >= 5)).collect()
    }

    #[test]
    fn test_month_cell_count_invariant() {
        // September 2022: 30 days, first day offset 3
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let renderer = Renderer::new(&academic, &holidays);
        let meta = academic.month_metadata()[0];
        assert_eq!((meta.days_in_month(), meta.first_day_offset()), (30, 3));

        let mut cells = weekend_grid(SHORT_GRID_WIDTH);
        let mut cursor = DateCursor::new(naive(2022, 9, 1));
        let report = renderer.render_month(&meta, &mut cells, &mut cursor);

        assert_eq!(report.days_rendered, 30);
        assert_eq!(report.empty_cells, 5);
        assert_eq!(cursor.visited(), 30);
        assert_eq!(cursor.current(), naive(2022, 10, 1));

        let days = cells.iter().filter_map(GridCell::day).collect::<Vec<_>>();
        assert_eq!(days, (1..=30).collect::<Vec<u8>>());
        assert_eq!(cells[3].day(), Some(1));
        assert_eq!(cells[3].date(), Some(naive(2022, 9, 1)));
        assert_eq!(cells[32].day(), Some(30));
    }

    #[test]
    fn test_filler_cells_are_empty_and_lose_weekend() {
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let renderer = Renderer::new(&academic, &holidays);
        let meta = academic.month_metadata()[0];

        let mut cells = weekend_grid(SHORT_GRID_WIDTH);
        let mut cursor = DateCursor::new(naive(2022, 9, 1));
        renderer.render_month(&meta, &mut cells, &mut cursor);

        for i in (0..3).chain(33..35) {
            assert!(cells[i].has_tag(Tag::Empty), "cell {i} should be filler");
            assert!(!cells[i].has_tag(Tag::Weekend), "cell {i} keeps no weekend mark");
            assert_eq!(cells[i].day(), None);
        }
        // Saturday 3 September keeps its weekend mark
        assert!(cells[5].has_tag(Tag::Weekend));
        assert!(!cells[5].has_tag(Tag::Empty));
    }

    #[test]
    fn test_short_grid_leaves_cursor_behind() {
        // December 2022: offset 3, 31 days; 28 cells reach only day 25
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let renderer = Renderer::new(&academic, &holidays);
        let meta = academic.month_metadata()[3];

        let mut cells = weekend_grid(28);
        let mut cursor = DateCursor::new(naive(2022, 12, 1));
        let report = renderer.render_month(&meta, &mut cells, &mut cursor);

        assert_eq!(report.days_rendered, 25);
        assert_eq!(cursor.current(), naive(2022, 12, 26));
    }

    #[test]
    fn test_full_pass_visits_every_day_once() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);

        let report = Renderer::new(&academic, &holidays).render(&mut surface);
        assert!(report.is_complete());
        assert_eq!(report.days_visited, 365);
        assert_eq!(report.last_date, Some(date(2023, 8, 31)));
        assert_eq!(report.end_date, Some(date(2023, 8, 31)));
        assert_eq!(report.months.len(), 12);

        let dates = academic
            .month_metadata()
            .iter()
            .flat_map(|meta| surface.cells(meta.month_index()).iter().filter_map(GridCell::date))
            .collect::<Vec<_>>();
        assert_eq!(dates.len(), 365);
        assert_eq!(dates.first(), Some(&naive(2022, 9, 1)));
        assert_eq!(dates.last(), Some(&naive(2023, 8, 31)));
        for pair in dates.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]), "skip or repeat after {}", pair[0]);
        }
    }

    #[test]
    fn test_full_pass_over_leap_year() {
        let academic = AcademicYear::new(year(2023), year(2024));
        let holidays = HolidayCalendar::default();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);

        let report = Renderer::new(&academic, &holidays).render(&mut surface);
        assert_eq!(report.days_visited, 366);

        let february = surface.cell_for_day(month_index(1), 29).expect("leap day rendered");
        assert_eq!(february.date(), Some(naive(2024, 2, 29)));
    }

    #[test]
    fn test_day_numbers_match_dates() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        Renderer::new(&academic, &holidays).render(&mut surface);

        for meta in academic.month_metadata() {
            for cell in surface.cells(meta.month_index()) {
                if let (Some(day), Some(shown)) = (cell.day(), cell.date()) {
                    assert_eq!(shown, meta.first_day() + chrono::Days::new(u64::from(day) - 1));
                }
            }
        }
    }

    #[test]
    fn test_december_bank_holiday() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        Renderer::new(&academic, &holidays).render(&mut surface);

        let boxing_day = surface
            .cell_for_day(month_index(11), 26)
            .expect("December 26 rendered");
        assert_eq!(boxing_day.date(), Some(naive(2022, 12, 26)));
        assert!(boxing_day.has_tag(Tag::BankHoliday));
        assert!(!boxing_day.has_tag(Tag::SchoolHoliday), "bank holiday wins over winter break");
    }

    #[test]
    fn test_weekend_in_school_holiday_not_tagged() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        Renderer::new(&academic, &holidays).render(&mut surface);

        // Saturday 24 December 2022, inside winter break
        let saturday = surface.cell_for_day(month_index(11), 24).expect("December 24 rendered");
        assert!(saturday.has_tag(Tag::Weekend));
        assert!(!saturday.has_tag(Tag::SchoolHoliday));

        // Wednesday 21 December 2022, inside winter break
        let wednesday = surface.cell_for_day(month_index(11), 21).expect("December 21 rendered");
        assert!(wednesday.has_tag(Tag::SchoolHoliday));
    }

    #[test]
    fn test_month_report_counts() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        let report = Renderer::new(&academic, &holidays).render(&mut surface);

        // October: half term Mon 24 to Fri 28
        let october = report.months[1];
        assert_eq!(october.month, month_index(9));
        assert_eq!(october.school_holidays, 5);
        assert_eq!(october.bank_holidays, 0);

        // December: 26 and 27 are bank holidays; 19-23 and 28-30 are school days off
        let december = report.months[3];
        assert_eq!(december.bank_holidays, 2);
        assert_eq!(december.school_holidays, 8);
    }

    #[test]
    fn test_label_months() {
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        Renderer::new(&academic, &holidays).label_months(&mut surface);

        assert_eq!(surface.label(month_index(8)), "September 2022");
        assert_eq!(surface.label(month_index(11)), "December 2022");
        assert_eq!(surface.label(month_index(0)), "January 2023");
        assert_eq!(surface.label(month_index(7)), "August 2023");
    }

    #[test]
    fn test_report_serializes_dates_as_literals() {
        let academic = academic_2022();
        let holidays = holidays_2022();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        let report = Renderer::new(&academic, &holidays).render(&mut surface);

        let json = serde_json::to_value(&report).expect("failed to serialize render report");
        assert_eq!(json["last_date"], "08/31/2023");
        assert_eq!(json["end_date"], "08/31/2023");
        assert_eq!(json["days_visited"], 365);
        assert_eq!(json["months"][3]["bank_holidays"], 2);
        assert_eq!(json["months"][0]["month"], 8);
    }

    #[test]
    fn test_non_consecutive_years_are_not_complete() {
        // Same day count as 2022/2023, but the January grid is laid out for 2030
        let academic = AcademicYear::new(year(2022), year(2030));
        let holidays = HolidayCalendar::default();
        let mut surface = GridSurface::new(FULL_GRID_WIDTH);
        let report = Renderer::new(&academic, &holidays).render(&mut surface);

        assert_eq!(report.days_visited, report.expected_days);
        assert_eq!(report.last_date, Some(date(2023, 8, 31)));
        assert_eq!(report.end_date, Some(date(2030, 8, 31)));
        assert!(!report.is_complete());
    }

    #[test]
    fn test_short_grids_are_not_complete() {
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let mut surface = GridSurface::new(SHORT_GRID_WIDTH);
        let report = Renderer::new(&academic, &holidays).render(&mut surface);

        // October 2022 opens on a Saturday and needs 36 cells
        assert!(report.days_visited < report.expected_days);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_cursor_tracks_last_visited() {
        let academic = academic_2022();
        let holidays = HolidayCalendar::default();
        let renderer = Renderer::new(&academic, &holidays);
        let meta = academic.month_metadata()[0];

        let mut cursor = DateCursor::new(naive(2022, 9, 1));
        assert_eq!(cursor.last_visited(), None);

        let mut cells = weekend_grid(SHORT_GRID_WIDTH);
        renderer.render_month(&meta, &mut cells, &mut cursor);
        assert_eq!(cursor.last_visited(), Some(naive(2022, 9, 30)));
    }
}
