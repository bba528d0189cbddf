use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{DEFAULT_BANK_HOLIDAYS, DEFAULT_SCHOOL_HOLIDAYS, DEFAULT_YEAR_1, DEFAULT_YEAR_2};
use crate::{AcademicCalendar, AcademicYear, CalendarDate, HolidayCalendar, HolidayRange, ParseError, RangeError, Year};

/// Operator-supplied data for one academic year.
///
/// Update once the school term dates for the next academic year are
/// released. Dates are month-first literals (`MM/DD/YYYY`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Year of the September that opens the academic year
    pub year_1: String,
    /// Year of the August that closes it
    pub year_2: String,
    #[serde(default)]
    pub bank_holidays: Vec<CalendarDate>,
    /// Half terms and breaks, each an inclusive `[start, end]` pair
    #[serde(default)]
    pub school_holiday_ranges: Vec<HolidayRange>,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A year label is not a valid year.
    #[error("Invalid year label {label:?}: {source}")]
    InvalidYear {
        label:  String,
        #[source]
        source: ParseError,
    },

    /// The second year does not directly follow the first.
    #[error("Academic year must span consecutive years, got {year_1} and {year_2}")]
    NonConsecutiveYears { year_1: Year, year_2: Year },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid calendar configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalendarConfig {
    /// Reads a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed JSON, unknown fields, bad
    /// date literals or reversed ranges.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the configuration into a ready-to-render calendar.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidYear` for a malformed year label and
    /// `ConfigError::NonConsecutiveYears` unless `year_2` is `year_1 + 1`.
    pub fn build(&self) -> Result<AcademicCalendar, ConfigError> {
        let year_1 = parse_year(&self.year_1)?;
        let year_2 = parse_year(&self.year_2)?;
        if year_1.next() != Some(year_2) {
            return Err(ConfigError::NonConsecutiveYears { year_1, year_2 });
        }

        let holidays = HolidayCalendar::new(
            self.bank_holidays.iter().copied(),
            self.school_holiday_ranges.iter().copied(),
        );
        info!(
            %year_1,
            %year_2,
            bank_holidays = self.bank_holidays.len(),
            school_holiday_ranges = self.school_holiday_ranges.len(),
            "built academic calendar"
        );
        Ok(AcademicCalendar::new(AcademicYear::new(year_1, year_2), holidays))
    }

    /// Builds a configuration from literal strings, as the data is usually
    /// written by hand.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` or `ConfigError::Range` for the first bad
    /// literal.
    pub fn from_literals(
        year_1: &str,
        year_2: &str,
        bank_holidays: &[&str],
        school_holiday_ranges: &[(&str, &str)],
    ) -> Result<Self, ConfigError> {
        let bank_holidays = bank_holidays
            .iter()
            .map(|literal| literal.parse::<CalendarDate>())
            .collect::<Result<Vec<_>, _>>()?;
        let school_holiday_ranges = school_holiday_ranges
            .iter()
            .map(|(start, end)| HolidayRange::parse(start, end))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            year_1: year_1.to_owned(),
            year_2: year_2.to_owned(),
            bank_holidays,
            school_holiday_ranges,
        })
    }
}

impl Default for CalendarConfig {
    /// The 2022/2023 academic year.
    fn default() -> Self {
        let bank_holidays = DEFAULT_BANK_HOLIDAYS
            .iter()
            .filter_map(|literal| literal.parse().ok())
            .collect();
        let school_holiday_ranges = DEFAULT_SCHOOL_HOLIDAYS
            .iter()
            .filter_map(|(start, end)| HolidayRange::parse(start, end).ok())
            .collect();
        Self {
            year_1: DEFAULT_YEAR_1.to_owned(),
            year_2: DEFAULT_YEAR_2.to_owned(),
            bank_holidays,
            school_holiday_ranges,
        }
    }
}

fn parse_year(label: &str) -> Result<Year, ConfigError> {
    label.parse().map_err(|source| ConfigError::InvalidYear {
        label: label.to_owned(),
        source,
    })
}
