use crate::{AcademicYear, HolidayCalendar, RenderReport, RenderSurface, Renderer};

/// A validated academic year together with its holiday data.
///
/// Built from a [`CalendarConfig`](crate::CalendarConfig); one call to
/// [`render`](Self::render) performs the whole page-load pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicCalendar {
    academic_year: AcademicYear,
    holidays:      HolidayCalendar,
}

impl AcademicCalendar {
    pub const fn new(academic_year: AcademicYear, holidays: HolidayCalendar) -> Self {
        Self {
            academic_year,
            holidays,
        }
    }

    pub const fn academic_year(&self) -> &AcademicYear {
        &self.academic_year
    }

    pub const fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub const fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&self.academic_year, &self.holidays)
    }

    /// Appends the academic year to the month labels, then fills every month grid.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) -> RenderReport {
        let renderer = self.renderer();
        renderer.label_months(surface);
        renderer.render(surface)
    }
}
