//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! monthgrid            // Current month
//! monthgrid 2 2024     // February 2024
//! monthgrid --shift 1  // Next month
//! monthgrid -i         // Interactive navigation
//! ```

use std::io::BufRead;

use monthgrid::args::{Args, check_display_month, get_display_month};
use monthgrid::clock::{SystemClock, SystemTimezone};
use monthgrid::error::CalError;
use monthgrid::formatter::print_widget;
use monthgrid::navigation::{NavCommand, Navigator};
use monthgrid::types::CalContext;

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("monthgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CalError> {
    let clock = SystemClock;
    let ctx = CalContext::new(args, &SystemTimezone::default());
    let start = get_display_month(args, &clock)?;

    let mut navigator = Navigator::starting_at(clock, start.year, start.month)?;
    if let Some(months) = args.shift {
        check_display_month(navigator.shift(months)?)?;
    }

    render(&ctx, &navigator)?;
    if !args.interactive {
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<NavCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("monthgrid: {}", e);
                continue;
            }
        };
        if !navigator.apply(command)? {
            break;
        }
        println!();
        render(&ctx, &navigator)?;
    }

    Ok(())
}

fn render(ctx: &CalContext, navigator: &Navigator<SystemClock>) -> Result<(), CalError> {
    let cells = navigator.grid()?;
    print_widget(ctx, navigator.visible(), &cells);
    Ok(())
}
