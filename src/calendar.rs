//! Month grid construction using Zeller's algorithm on the proleptic Gregorian calendar.

use chrono::Weekday;

use crate::clock::Clock;
use crate::error::{CalError, Result};
use crate::types::{CELLS_PER_MONTH, CalendarCell, CalendarDate, MonthRef};

/// Check if a year is a leap year: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month (0-based month index).
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => Ok(31),
        3 | 5 | 8 | 10 => Ok(30),
        1 if is_leap_year(year) => Ok(29),
        1 => Ok(28),
        _ => Err(CalError::InvalidMonth(month)),
    }
}

/// Calculate weekday of any date using Zeller's congruence.
///
/// Works on `i64` with euclidean division so years at the ends of the `i32`
/// range and negative (proleptic) years come out right.
pub fn weekday_of(date: CalendarDate) -> Weekday {
    let month = date.month as i64 + 1;
    let (m, y) = if month < 3 {
        (month + 12, date.year as i64 - 1)
    } else {
        (month, date.year as i64)
    };
    let q = date.day as i64;
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => unreachable!(),
    }
}

/// Day of week of the 1st of the month, 0=Sunday..6=Saturday.
pub fn start_weekday(year: i32, month: u32) -> Result<u32> {
    let first = MonthRef::new(year, month)?.first_day();
    Ok(weekday_of(first).num_days_from_sunday())
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// The month before `(year, month)`, wrapping January to December of `year - 1`.
pub fn previous_month(year: i32, month: u32) -> Result<(i32, u32)> {
    let prev = MonthRef::new(year, month)?.previous()?;
    Ok((prev.year, prev.month))
}

/// The month after `(year, month)`, wrapping December to January of `year + 1`.
pub fn next_month(year: i32, month: u32) -> Result<(i32, u32)> {
    let next = MonthRef::new(year, month)?.next()?;
    Ok((next.year, next.month))
}

/// Build the 42-cell grid for a month.
///
/// The grid starts on the Sunday on or before the 1st and always spans six
/// weeks, so leading cells come from the previous month and trailing cells
/// from the next one. Only a cell of the displayed month can be flagged as
/// today.
pub fn build_grid(year: i32, month: u32, today: CalendarDate) -> Result<Vec<CalendarCell>> {
    let current = MonthRef::new(year, month)?;
    let prev = current.previous()?;
    let next = current.next()?;

    let start = start_weekday(year, month)? as usize;
    let days = days_in_month(year, month)? as usize;
    let days_in_prev = days_in_month(prev.year, prev.month)? as usize;

    log::trace!(
        "building grid for {}-{:02}: start weekday {}, {} days, {} days in previous month",
        year,
        month + 1,
        start,
        days,
        days_in_prev
    );

    let mut cells = Vec::with_capacity(CELLS_PER_MONTH);
    for index in 0..CELLS_PER_MONTH {
        let (owner, day, is_current_month) = if index < start {
            (prev, days_in_prev - start + 1 + index, false)
        } else if index >= start + days {
            (next, index - (start + days) + 1, false)
        } else {
            (current, index - start + 1, true)
        };

        let date = CalendarDate::new(owner.year, owner.month, day as u32);
        let is_today = is_current_month && date == today;
        cells.push(CalendarCell::new(date, is_current_month, is_today));
    }

    Ok(cells)
}

/// Grid builder bound to a source of "today".
#[derive(Debug, Clone)]
pub struct GridBuilder<C> {
    clock: C,
}

impl<C: Clock> GridBuilder<C> {
    pub fn new(clock: C) -> Self {
        GridBuilder { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build the grid for `(year, month)`, reading today from the clock once.
    pub fn build(&self, year: i32, month: u32) -> Result<Vec<CalendarCell>> {
        build_grid(year, month, self.clock.today())
    }
}
