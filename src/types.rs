//! Type definitions and constants for the month grid and its rendering.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::decoration::EventRule;
use crate::error::{CalError, Result};

/// A calendar day without any time-of-day component.
///
/// `month` is 0-based (0 = January). Field order makes the derived `Ord`
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }

    /// Convert from a chrono date, dropping to a 0-based month.
    pub fn from_naive(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }

    /// Convert to a chrono date, if chrono can represent it.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    pub fn month_ref(self) -> MonthRef {
        MonthRef {
            year: self.year,
            month: self.month,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// A displayed month: year plus 0-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if month > MAX_MONTH_INDEX {
            return Err(CalError::InvalidMonth(month));
        }
        Ok(MonthRef { year, month })
    }

    /// The month before this one; January wraps to December of the previous year.
    pub fn previous(self) -> Result<Self> {
        if self.month == 0 {
            let year = self
                .year
                .checked_sub(1)
                .ok_or(CalError::YearOutOfRange(self.year))?;
            Ok(MonthRef {
                year,
                month: MAX_MONTH_INDEX,
            })
        } else {
            Ok(MonthRef {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    /// The month after this one; December wraps to January of the next year.
    pub fn next(self) -> Result<Self> {
        if self.month == MAX_MONTH_INDEX {
            let year = self
                .year
                .checked_add(1)
                .ok_or(CalError::YearOutOfRange(self.year))?;
            Ok(MonthRef { year, month: 0 })
        } else {
            Ok(MonthRef {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    pub fn first_day(self) -> CalendarDate {
        CalendarDate::new(self.year, self.month, 1)
    }
}

/// One day cell of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: CalendarDate,
    /// The cell's month is the displayed month.
    pub is_current_month: bool,
    /// The cell is today and belongs to the displayed month.
    pub is_today: bool,
    /// Unique within one grid: `year-month-day`, month 0-based.
    pub key: String,
}

impl CalendarCell {
    pub fn new(date: CalendarDate, is_current_month: bool, is_today: bool) -> Self {
        CalendarCell {
            key: format!("{}-{}-{}", date.year, date.month, date.day),
            date,
            is_current_month,
            is_today,
        }
    }
}

/// Rendering context containing all display options.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Label shown in the footer ("Times shown in ...").
    pub timezone_label: String,
    /// Left margin applied to every rendered line.
    pub indent: usize,
    /// Decides which cells carry the event marker.
    pub event_rule: Arc<dyn EventRule + Send + Sync>,
}

// Constants for grid layout
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_MONTH: usize = WEEKS_PER_GRID * DAYS_PER_WEEK; // 42
pub const MAX_MONTH_INDEX: u32 = 11;

// Width of one rendered cell, plus the gap between cells
pub const CELL_WIDTH: usize = 5;
pub const CELL_GAP: usize = 1;
pub const WIDGET_WIDTH: usize = DAYS_PER_WEEK * CELL_WIDTH + (DAYS_PER_WEEK - 1) * CELL_GAP;

/// Fixed weekday header, starting on Sunday.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const TITLE: &str = "Calendar";
pub const SUBTITLE: &str =
    "Browse months, see today at a glance, and get a clean overview of your week.";

/// Footer label used when the timezone cannot be resolved.
pub const TIMEZONE_FALLBACK: &str = "Local time";

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_BOLD: &str = "\x1b[1m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
