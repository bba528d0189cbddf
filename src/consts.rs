/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of months in the academic year
pub const MONTHS_IN_YEAR: usize = 12;

/// Zero-based index of the first academic month (September)
pub const SEPTEMBER_INDEX: u8 = 8;

/// Zero-based index of December, the last month labelled with the first year
pub const DECEMBER_INDEX: u8 = 11;

/// Zero-based index of August, the last academic month
pub const AUGUST_INDEX: u8 = 7;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Columns in one week row, Monday first
pub const DAYS_PER_WEEK: usize = 7;

/// Grid width with six week rows; every month fits
pub const FULL_GRID_WIDTH: usize = 6 * DAYS_PER_WEEK;

/// Grid width with five week rows
pub const SHORT_GRID_WIDTH: usize = 5 * DAYS_PER_WEEK;

/// Month-first format separator (`MM/DD/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Lowercase English month names, indexed by zero-based month.
/// These double as the per-month table ids of the rendering surface.
pub const MONTH_IDS: [&str; MONTHS_IN_YEAR] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Surface class for cells outside the month
pub const EMPTY_CLASS: &str = "calendar__type--empty";
/// Surface class for pre-marked weekend cells
pub const WEEKEND_CLASS: &str = "calendar__type--weekend";
/// Surface class for bank holidays
pub const BANK_HOLIDAY_CLASS: &str = "calendar__type--bank-holiday";
/// Surface class for school holidays
pub const SCHOOL_HOLIDAY_CLASS: &str = "calendar__type--school-holiday";

/// First year of the bundled default data set
pub(crate) const DEFAULT_YEAR_1: &str = "2022";
/// Second year of the bundled default data set
pub(crate) const DEFAULT_YEAR_2: &str = "2023";

/// Bank holidays of the 2022/2023 academic year
pub(crate) const DEFAULT_BANK_HOLIDAYS: [&str; 8] = [
    "12/26/2022",
    "12/27/2022",
    "01/02/2023",
    "04/07/2023",
    "04/10/2023",
    "05/01/2023",
    "05/29/2023",
    "08/29/2023",
];

/// School holiday ranges of the 2022/2023 academic year
pub(crate) const DEFAULT_SCHOOL_HOLIDAYS: [(&str, &str); 7] = [
    ("08/31/2022", "09/05/2022"), // summer, tail of year 1
    ("10/24/2022", "10/28/2022"), // autumn half term
    ("12/19/2022", "01/03/2023"), // winter
    ("02/13/2023", "02/17/2023"), // spring half term
    ("03/31/2023", "04/17/2023"), // easter
    ("05/29/2023", "06/02/2023"), // summer half term
    ("07/25/2023", "09/04/2023"), // summer, head of year 2
];
