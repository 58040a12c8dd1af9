//! Visible-month state and the transitions that move it.

use std::str::FromStr;

use crate::calendar::build_grid;
use crate::clock::Clock;
use crate::error::{CalError, Result};
use crate::types::{CalendarCell, MonthRef};

/// A navigation request, as typed in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Previous,
    Next,
    Today,
    Quit,
}

impl FromStr for NavCommand {
    type Err = CalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "p" | "prev" | "previous" | "<" => Ok(NavCommand::Previous),
            "n" | "next" | ">" => Ok(NavCommand::Next),
            "t" | "today" => Ok(NavCommand::Today),
            "q" | "quit" | "exit" => Ok(NavCommand::Quit),
            other => Err(CalError::InvalidArgument(format!(
                "Unknown command: {} (use p, n, t or q)",
                other
            ))),
        }
    }
}

/// Holds the visible month and moves it around.
#[derive(Debug, Clone)]
pub struct Navigator<C> {
    visible: MonthRef,
    clock: C,
}

impl<C: Clock> Navigator<C> {
    /// Start on the clock's current month.
    pub fn new(clock: C) -> Self {
        let visible = clock.today().month_ref();
        Navigator { visible, clock }
    }

    /// Start on a given month.
    pub fn starting_at(clock: C, year: i32, month: u32) -> Result<Self> {
        let visible = MonthRef::new(year, month)?;
        Ok(Navigator { visible, clock })
    }

    pub fn visible(&self) -> MonthRef {
        self.visible
    }

    pub fn go_to_previous_month(&mut self) -> Result<MonthRef> {
        self.visible = self.visible.previous()?;
        log::debug!("navigated to {:?}", self.visible);
        Ok(self.visible)
    }

    pub fn go_to_next_month(&mut self) -> Result<MonthRef> {
        self.visible = self.visible.next()?;
        log::debug!("navigated to {:?}", self.visible);
        Ok(self.visible)
    }

    pub fn go_to_today(&mut self) -> MonthRef {
        self.visible = self.clock.today().month_ref();
        log::debug!("navigated to today's month {:?}", self.visible);
        self.visible
    }

    /// Move `months` steps forward (positive) or backward (negative).
    ///
    /// On error the visible month is left unchanged.
    pub fn shift(&mut self, months: i32) -> Result<MonthRef> {
        let total = self.visible.year as i64 * 12 + self.visible.month as i64 + months as i64;
        let year = i32::try_from(total.div_euclid(12))
            .map_err(|_| CalError::YearOutOfRange(self.visible.year))?;
        self.visible = MonthRef::new(year, total.rem_euclid(12) as u32)?;
        log::debug!("shifted {} months to {:?}", months, self.visible);
        Ok(self.visible)
    }

    /// Apply a command. Returns `false` when the command asks to quit.
    pub fn apply(&mut self, command: NavCommand) -> Result<bool> {
        match command {
            NavCommand::Previous => {
                self.go_to_previous_month()?;
            }
            NavCommand::Next => {
                self.go_to_next_month()?;
            }
            NavCommand::Today => {
                self.go_to_today();
            }
            NavCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Grid for the visible month, with today read from the clock.
    pub fn grid(&self) -> Result<Vec<CalendarCell>> {
        build_grid(self.visible.year, self.visible.month, self.clock.today())
    }
}
