//! Month calendar widget built around a fixed 6x7 day grid.
//!
//! Features:
//! - 42-cell grids with previous/next month spillover
//! - Month navigation with exact year wraparound
//! - Injectable "today" and timezone providers
//! - Terminal rendering with today highlight and weekend markers

pub mod args;
pub mod calendar;
pub mod clock;
pub mod decoration;
pub mod error;
pub mod formatter;
pub mod navigation;
pub mod types;

pub use calendar::{GridBuilder, build_grid, next_month, previous_month};
pub use error::CalError;
pub use types::{CalendarCell, CalendarDate, MonthRef};
