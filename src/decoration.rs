//! Per-cell decorations layered on top of the grid.
//!
//! Each decoration is an independent flag; a cell can be today, outside the
//! displayed month and carry an event marker all at once.

use std::fmt::Debug;

use crate::calendar::{is_weekend, weekday_of};
use crate::types::CalendarCell;

/// Decides whether a cell shows the event marker.
pub trait EventRule: Debug {
    fn has_event(&self, cell: &CalendarCell) -> bool;

    /// Legend text for the marker; `None` leaves it out of the footer.
    fn legend_label(&self) -> Option<&str> {
        None
    }
}

/// Placeholder rule: every Saturday and Sunday has an "event".
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendEvents;

impl EventRule for WeekendEvents {
    fn has_event(&self, cell: &CalendarCell) -> bool {
        is_weekend(weekday_of(cell.date))
    }

    fn legend_label(&self) -> Option<&str> {
        Some("Weekend")
    }
}

/// Rule that never marks anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl EventRule for NoEvents {
    fn has_event(&self, _cell: &CalendarCell) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellDecorations {
    pub today: bool,
    pub outside_month: bool,
    pub event: bool,
}

impl CellDecorations {
    pub fn for_cell(cell: &CalendarCell, rule: &dyn EventRule) -> Self {
        CellDecorations {
            today: cell.is_today,
            outside_month: !cell.is_current_month,
            event: rule.has_event(cell),
        }
    }
}
