//! Ambient date and timezone lookups behind injectable providers.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;

use crate::types::{CalendarDate, TIMEZONE_FALLBACK};

/// Environment variable overriding today's date (`YYYY-MM-DD`).
pub const TEST_TIME_ENV_VAR: &str = "CAL_TEST_TIME";

/// Source of "today".
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Local wall clock, respecting `CAL_TEST_TIME` for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        if let Ok(test_time) = std::env::var(TEST_TIME_ENV_VAR) {
            match chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d") {
                Ok(date) => {
                    log::debug!("today overridden by {TEST_TIME_ENV_VAR}: {date}");
                    return CalendarDate::from_naive(date);
                }
                Err(e) => {
                    log::debug!("ignoring {TEST_TIME_ENV_VAR}={test_time:?}: {e}");
                }
            }
        }
        CalendarDate::from_naive(chrono::Local::now().date_naive())
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        FixedClock(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// Best-effort lookup of the local IANA timezone name.
pub trait TimezoneSource {
    fn timezone_name(&self) -> Option<String>;
}

/// Resolves the timezone from `TZ`, then `/etc/timezone`, then the
/// `/etc/localtime` symlink.
#[derive(Debug, Clone)]
pub struct SystemTimezone {
    pub use_env: bool,
    pub timezone_file: PathBuf,
    pub localtime_link: PathBuf,
}

impl Default for SystemTimezone {
    fn default() -> Self {
        SystemTimezone {
            use_env: true,
            timezone_file: PathBuf::from("/etc/timezone"),
            localtime_link: PathBuf::from("/etc/localtime"),
        }
    }
}

impl TimezoneSource for SystemTimezone {
    fn timezone_name(&self) -> Option<String> {
        if self.use_env
            && let Ok(raw) = std::env::var("TZ")
        {
            // POSIX allows a leading ':' before a zoneinfo name
            if let Some(tz) = parse_timezone(raw.trim_start_matches(':')) {
                return Some(tz);
            }
            log::debug!("TZ={raw:?} is not an IANA timezone name");
        }

        if let Some(tz) = load_timezone_from_file(&self.timezone_file) {
            return Some(tz);
        }

        load_timezone_from_link(&self.localtime_link)
    }
}

/// Timezone source with a preset answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTimezone(pub Option<String>);

impl TimezoneSource for StaticTimezone {
    fn timezone_name(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Footer label for the timezone, falling back to a placeholder.
pub fn timezone_label(source: &dyn TimezoneSource) -> String {
    match source.timezone_name() {
        Some(name) => name,
        None => {
            log::debug!("timezone could not be resolved; using {TIMEZONE_FALLBACK:?}");
            TIMEZONE_FALLBACK.to_string()
        }
    }
}

/// Validate a candidate name against the tz database.
pub fn parse_timezone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Tz>().ok().map(|tz| tz.name().to_string())
}

fn load_timezone_from_file(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("cannot read {}: {e}", path.display());
            return None;
        }
    };
    content.lines().find_map(parse_timezone)
}

fn load_timezone_from_link(path: &Path) -> Option<String> {
    let target = match std::fs::read_link(path) {
        Ok(target) => target,
        Err(e) => {
            log::debug!("cannot resolve {}: {e}", path.display());
            return None;
        }
    };
    let target = target.to_string_lossy();
    let (_, name) = target.split_once("zoneinfo/")?;
    parse_timezone(name)
}
