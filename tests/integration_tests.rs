//! Integration tests for grid invariants across many months.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use monthgrid::calendar::{build_grid, days_in_month, next_month, previous_month, start_weekday};
use monthgrid::types::{CELLS_PER_MONTH, CalendarDate};

const TODAY: CalendarDate = CalendarDate::new(2024, 1, 15);

fn all_months(years: std::ops::RangeInclusive<i32>) -> impl Iterator<Item = (i32, u32)> {
    years.flat_map(|year| (0..12).map(move |month| (year, month)))
}

mod grid_invariants {
    use super::*;

    #[test]
    fn always_42_cells() {
        for (year, month) in all_months(1600..=2400) {
            let cells = build_grid(year, month, TODAY).unwrap();
            assert_eq!(cells.len(), CELLS_PER_MONTH, "{year}-{month}");
        }
    }

    #[test]
    fn current_month_days_are_one_to_length_in_order() {
        for (year, month) in all_months(1900..=2100) {
            let cells = build_grid(year, month, TODAY).unwrap();
            let current: Vec<u32> = cells
                .iter()
                .filter(|c| c.is_current_month)
                .map(|c| c.date.day)
                .collect();
            let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
            assert_eq!(current, expected, "{year}-{month}");
            assert!(
                cells
                    .iter()
                    .filter(|c| c.is_current_month)
                    .all(|c| c.date.year == year && c.date.month == month)
            );
        }
    }

    #[test]
    fn dates_are_consecutive_days() {
        for (year, month) in all_months(1900..=2100) {
            let cells = build_grid(year, month, TODAY).unwrap();
            for pair in cells.windows(2) {
                assert!(pair[0].date < pair[1].date, "{year}-{month}");
                let a = pair[0].date.to_naive().unwrap();
                let b = pair[1].date.to_naive().unwrap();
                assert_eq!(a.succ_opt().unwrap(), b, "{year}-{month}");
            }
        }
    }

    #[test]
    fn matches_independent_chrono_construction() {
        for (year, month) in all_months(1990..=2030) {
            let first = NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap();
            let grid_start =
                first - Duration::days(first.weekday().num_days_from_sunday() as i64);
            let cells = build_grid(year, month, TODAY).unwrap();
            for (i, cell) in cells.iter().enumerate() {
                let expected = grid_start + Duration::days(i as i64);
                assert_eq!(cell.date.to_naive(), Some(expected), "{year}-{month} #{i}");
                assert_eq!(cell.date.to_naive().unwrap().weekday().num_days_from_sunday() as usize, i % 7);
            }
        }
    }

    #[test]
    fn spillover_cells_are_in_neighbour_months() {
        for (year, month) in all_months(1999..=2001) {
            let cells = build_grid(year, month, TODAY).unwrap();
            let start = start_weekday(year, month).unwrap() as usize;
            let days = days_in_month(year, month).unwrap() as usize;
            let (py, pm) = previous_month(year, month).unwrap();
            let (ny, nm) = next_month(year, month).unwrap();

            for cell in &cells[..start] {
                assert!(!cell.is_current_month);
                assert_eq!((cell.date.year, cell.date.month), (py, pm));
            }
            for cell in &cells[start + days..] {
                assert!(!cell.is_current_month);
                assert_eq!((cell.date.year, cell.date.month), (ny, nm));
            }
        }
    }

    #[test]
    fn keys_are_unique() {
        for (year, month) in all_months(2020..=2030) {
            let cells = build_grid(year, month, TODAY).unwrap();
            let keys: HashSet<_> = cells.iter().map(|c| c.key.as_str()).collect();
            assert_eq!(keys.len(), CELLS_PER_MONTH, "{year}-{month}");
        }
    }
}

mod today_invariants {
    use super::*;

    #[test]
    fn at_most_one_today_and_only_in_its_month() {
        let todays = [
            CalendarDate::new(2024, 1, 15),
            CalendarDate::new(2024, 0, 1),
            CalendarDate::new(2023, 11, 31),
            CalendarDate::new(2024, 1, 29),
        ];
        for today in todays {
            for (year, month) in all_months(2023..=2025) {
                let cells = build_grid(year, month, today).unwrap();
                let marked = cells.iter().filter(|c| c.is_today).count();
                let expected = usize::from(today.year == year && today.month == month);
                assert_eq!(marked, expected, "today {today} grid {year}-{month}");
            }
        }
    }
}

mod navigation_laws {
    use super::*;

    #[test]
    fn previous_and_next_round_trip() {
        for (year, month) in all_months(-3..=3).chain(all_months(1999..=2001)) {
            let (ny, nm) = next_month(year, month).unwrap();
            assert_eq!(previous_month(ny, nm).unwrap(), (year, month));
            let (py, pm) = previous_month(year, month).unwrap();
            assert_eq!(next_month(py, pm).unwrap(), (year, month));
        }
    }

    #[test]
    fn twelve_steps_advance_one_year() {
        let mut current = (2019, 7);
        for _ in 0..12 {
            current = next_month(current.0, current.1).unwrap();
        }
        assert_eq!(current, (2020, 7));
    }
}
