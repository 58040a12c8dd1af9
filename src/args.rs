//! Command-line argument parsing using clap.
//!
//! Arguments follow the cal convention: `[month] [year]`

use std::io::IsTerminal;
use std::sync::Arc;

use clap::{Parser, ValueHint};

use crate::clock::{Clock, TimezoneSource, timezone_label};
use crate::decoration::WeekendEvents;
use crate::error::{CalError, Result};
use crate::formatter::{get_terminal_width, parse_month, widget_indent};
use crate::types::{COLOR_ENABLED_BY_DEFAULT, CalContext, MonthRef};

#[derive(Parser, Debug)]
#[command(name = "monthgrid")]
#[command(about = "Displays a month calendar widget", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12 or name), or a four-digit year when given alone.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Move this many months forward (negative: backward) from the selected month.
    ///
    /// The resulting year must stay within 1-9999.
    #[arg(
        short = 's',
        long = "shift",
        allow_negative_numbers = true,
        help_heading = "Navigation options",
        value_name = "months"
    )]
    pub shift: Option<i32>,

    /// Read navigation commands (p, n, t, q) from stdin after each render.
    #[arg(short = 'i', long, help_heading = "Navigation options")]
    pub interactive: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month calendar with a fixed six-week grid.

Without any arguments, display the current month.

Examples:
  monthgrid              Display current month
  monthgrid 2 2024       Display February 2024
  monthgrid feb          Display February of the current year
  monthgrid 2024         Display the current month of 2024
  monthgrid --shift -1   Display the previous month
  monthgrid -i           Navigate interactively (p = previous, n = next, t = today, q = quit)";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalContext {
    pub fn new(args: &Args, timezone: &dyn TimezoneSource) -> Self {
        let is_terminal = std::io::stdout().is_terminal();
        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && is_terminal;

        // Center the widget like a card when writing to a terminal
        let indent = if is_terminal {
            widget_indent(get_terminal_width())
        } else {
            0
        };

        CalContext {
            color,
            timezone_label: timezone_label(timezone),
            indent,
            event_rule: Arc::new(WeekendEvents),
        }
    }
}

fn parse_year(s: &str) -> Result<i32> {
    let year = s
        .parse::<i32>()
        .map_err(|_| CalError::InvalidArgument(format!("Invalid year: {}", s)))?;
    check_year(year)
}

fn check_year(year: i32) -> Result<i32> {
    if !(1..=9999).contains(&year) {
        return Err(CalError::InvalidArgument(format!(
            "Invalid year: {} (must be 1-9999)",
            year
        )));
    }
    Ok(year)
}

/// Reject a displayed month whose year left 1-9999, e.g. after `--shift`.
pub fn check_display_month(month: MonthRef) -> Result<MonthRef> {
    check_year(month.year)?;
    Ok(month)
}

/// Calculate the displayed month from positional arguments.
///
/// Argument patterns:
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
pub fn get_display_month(args: &Args, clock: &dyn Clock) -> Result<MonthRef> {
    let today = clock.today();

    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        // One argument: could be year (4 digits) or month (1-2 digits)
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>()
                && (1000..=9999).contains(&num)
            {
                MonthRef::new(num, today.month)
            } else if let Some(month) = parse_month(val) {
                MonthRef::new(today.year, month - 1)
            } else {
                Err(CalError::InvalidArgument(format!(
                    "Invalid argument: {}",
                    val
                )))
            }
        }
        // Two arguments: month year (e.g., monthgrid 2 2024)
        (Some(month), Some(year)) => {
            let month = parse_month(month)
                .ok_or_else(|| CalError::InvalidArgument(format!("Invalid month: {}", month)))?;
            MonthRef::new(parse_year(year)?, month - 1)
        }
        // No arguments: current month
        (None, None) => Ok(today.month_ref()),
        // Invalid combinations
        (None, Some(_)) => Err(CalError::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}
