//! The rendering surface the calendar is written into.
//!
//! The surface owns a fixed grid of day cells per month and one label per
//! month. The renderer never creates or removes cells; it only relabels them.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::consts::{DAYS_PER_WEEK, MONTH_IDS, MONTHS_IN_YEAR};
use crate::{MonthIndex, Tag};

/// Column of Saturday in a Monday-first week
const SATURDAY_COLUMN: usize = 5;

/// A single day placeholder on the surface.
pub trait DayCell {
    /// Shows `day` (1-based day of month) as the cell's content
    fn set_day_number(&mut self, day: u8);

    fn add_tag(&mut self, tag: Tag);

    fn remove_tag(&mut self, tag: Tag);

    /// Whether the surface pre-marked this cell as a weekend
    fn is_weekend(&self) -> bool;

    /// Concrete date the cell shows. Surfaces that do not track dates can ignore it.
    fn set_date(&mut self, _date: NaiveDate) {}
}

/// Per-month cell collections and month labels.
pub trait RenderSurface {
    type Cell: DayCell;

    /// Cells of `month` in grid order, Monday of the first week first
    fn cells_mut(&mut self, month: MonthIndex) -> &mut [Self::Cell];

    /// Appends `suffix` to the label of `month`
    fn append_to_label(&mut self, month: MonthIndex, suffix: &str);
}

/// In-memory day cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    day:  Option<u8>,
    date: Option<NaiveDate>,
    tags: BTreeSet<Tag>,
}

impl GridCell {
    /// A blank cell, pre-marked as weekend when `weekend` is set
    pub fn new(weekend: bool) -> Self {
        let mut cell = Self::default();
        if weekend {
            cell.tags.insert(Tag::Weekend);
        }
        cell
    }

    pub const fn day(&self) -> Option<u8> {
        self.day
    }

    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter().copied()
    }

    /// Space separated class list, as it would appear on the surface
    pub fn class_list(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.class_name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DayCell for GridCell {
    fn set_day_number(&mut self, day: u8) {
        self.day = Some(day);
    }

    fn add_tag(&mut self, tag: Tag) {
        self.tags.insert(tag);
    }

    fn remove_tag(&mut self, tag: Tag) {
        self.tags.remove(&tag);
    }

    fn is_weekend(&self) -> bool {
        self.has_tag(Tag::Weekend)
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }
}

/// In-memory surface: twelve month grids of equal width, with the Saturday
/// and Sunday columns of every week pre-marked as weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSurface {
    months: [Vec<GridCell>; MONTHS_IN_YEAR],
    labels: [String; MONTHS_IN_YEAR],
}

impl GridSurface {
    /// Builds a skeleton with `width` cells per month, labelled with the
    /// English month names.
    pub fn new(width: usize) -> Self {
        let grid = (0..width)
            .map(|i| GridCell::new(i % DAYS_PER_WEEK >= SATURDAY_COLUMN))
            .collect::<Vec<_>>();
        let mut month = MonthIndex::from_month(chrono::Month::January);
        let labels = std::array::from_fn(|_| {
            let label = month.month().name().to_owned();
            month = month.succ();
            label
        });
        Self {
            months: std::array::from_fn(|_| grid.clone()),
            labels,
        }
    }

    pub fn cells(&self, month: MonthIndex) -> &[GridCell] {
        &self.months[usize::from(month.get())]
    }

    /// Looks a month grid up by its lowercase table id, e.g. `"december"`
    pub fn cells_by_id(&self, id: &str) -> Option<&[GridCell]> {
        MONTH_IDS
            .iter()
            .position(|&month_id| month_id == id)
            .map(|i| self.months[i].as_slice())
    }

    pub fn label(&self, month: MonthIndex) -> &str {
        &self.labels[usize::from(month.get())]
    }

    /// The cell showing day `day` of `month`, if any
    pub fn cell_for_day(&self, month: MonthIndex, day: u8) -> Option<&GridCell> {
        self.cells(month).iter().find(|cell| cell.day == Some(day))
    }
}

impl RenderSurface for GridSurface {
    type Cell = GridCell;

    fn cells_mut(&mut self, month: MonthIndex) -> &mut [GridCell] {
        &mut self.months[usize::from(month.get())]
    }

    fn append_to_label(&mut self, month: MonthIndex, suffix: &str) {
        self.labels[usize::from(month.get())].push_str(suffix);
    }
}
