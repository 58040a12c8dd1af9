//! End-to-end tests for the monthgrid binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn monthgrid(today: &str) -> Command {
    let mut cmd = Command::cargo_bin("monthgrid").unwrap();
    cmd.env("CAL_TEST_TIME", today)
        .env("LC_ALL", "en_US.UTF-8")
        .env("TZ", "Europe/Berlin");
    cmd
}

fn marked_day() -> impl Predicate<str> {
    predicate::str::is_match(r"\[[ \d]\d\]").unwrap()
}

#[test]
fn renders_requested_month_with_today() {
    monthgrid("2024-02-15")
        .args(["2", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("[15]"))
        .stdout(predicate::str::contains("Sun   Mon   Tue"))
        .stdout(predicate::str::contains("● Today   • Weekend"))
        .stdout(predicate::str::contains("Times shown in Europe/Berlin"));
}

#[test]
fn other_month_has_no_today_marker() {
    monthgrid("2024-02-15")
        .args(["3", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"))
        .stdout(marked_day().not());
}

#[test]
fn defaults_to_current_month() {
    monthgrid("2024-06-10")
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2024"))
        .stdout(predicate::str::contains("[10]"));
}

#[test]
fn piped_output_has_no_color() {
    monthgrid("2024-02-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn shift_crosses_year_boundaries() {
    monthgrid("2024-01-10")
        .args(["--shift", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2023"));

    monthgrid("2024-01-10")
        .args(["--shift", "1", "12", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"));
}

#[test]
fn shift_past_year_9999_fails() {
    monthgrid("2024-02-15")
        .args(["12", "9999", "--shift", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid year: 10000 (must be 1-9999)"))
        .stdout(predicate::str::contains("January 10000").not());
}

#[test]
fn polish_locale_uses_nominative_month() {
    monthgrid("2024-02-15")
        .env("LC_ALL", "pl_PL.UTF-8")
        .args(["2", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Luty 2024"))
        .stdout(predicate::str::contains("lutego").not());
}

#[test]
fn invalid_month_fails() {
    monthgrid("2024-02-15")
        .args(["13", "2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("monthgrid: Invalid month: 13"));
}

#[test]
fn invalid_year_fails() {
    monthgrid("2024-02-15")
        .args(["2", "10000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be 1-9999"));
}

#[test]
fn interactive_navigation() {
    monthgrid("2024-02-15")
        .args(["11", "2024", "-i"])
        .write_stdin("n\nn\nq\np\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("November 2024"))
        .stdout(predicate::str::contains("December 2024"))
        .stdout(predicate::str::contains("January 2025"))
        .stdout(predicate::str::contains("October 2024").not());
}

#[test]
fn interactive_today_and_unknown_command() {
    monthgrid("2024-02-15")
        .args(["1", "2020", "--interactive"])
        .write_stdin("x\nt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2020"))
        .stdout(predicate::str::contains("February 2024"))
        .stdout(predicate::str::contains("[15]"))
        .stderr(predicate::str::contains("Unknown command: x"));
}
