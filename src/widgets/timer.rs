//! Run-timer widget.
//!
//! The host reports how many seconds a load has been running today. The
//! widget turns that into three lines:
//!
//! ```text
//! 01:01:01        elapsed, hours uncapped
//! 4.24%           share of a 24 h day, two decimals
//! 19.322 кВт/ч    estimated energy in Wh at the configured load, three decimals
//! ```

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TimerStyle;
use crate::error::{CounterError, Result};

const SECS_PER_MIN: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Elapsed time split into clock fields, largest unit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    pub fn from_secs(total: u64) -> Self {
        let hours = total / SECS_PER_HOUR;
        let rest = total - hours * SECS_PER_HOUR;
        let minutes = rest / SECS_PER_MIN;
        Self {
            hours,
            minutes,
            seconds: rest - minutes * SECS_PER_MIN,
        }
    }
}

impl fmt::Display for Hms {
    /// Two-digit minimum per field. Hours grow past two digits instead of
    /// wrapping, so 100 h reads `100:00:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Share of a day, in percent, rounded to two decimals.
pub fn day_percent(total_secs: u64) -> f64 {
    (10_000.0 * total_secs as f64 / SECS_PER_DAY as f64).round() / 100.0
}

/// Energy drawn by a `load_watts` load over `total_secs`, in watt-hours,
/// rounded to three decimals. 3661 s at 19 W is `19.322`.
pub fn energy_estimate(total_secs: u64, load_watts: u32) -> f64 {
    (total_secs as f64 * f64::from(load_watts) / SECS_PER_HOUR as f64 * 1000.0).round() / 1000.0
}

/// Rendered run-timer widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterDisplay {
    pub text: String,
}

/// Parse the host's counter text as a whole number of seconds.
pub fn parse_counter(text: &str) -> core::result::Result<u64, CounterError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CounterError::Empty);
    }
    if let Some(digits) = text.strip_prefix('-') {
        // "-0" is still zero seconds
        return match digits.parse::<u64>() {
            Ok(0) => Ok(0),
            Ok(_) => Err(CounterError::Negative),
            Err(_) => Err(CounterError::NotANumber),
        };
    }
    text.parse().map_err(|_| CounterError::NotANumber)
}

/// Render the widget for `total_secs` of run time.
pub fn format_run_timer(total_secs: u64, style: &TimerStyle) -> CounterDisplay {
    let text = format!(
        "{}\n{}%\n{} {}",
        Hms::from_secs(total_secs),
        day_percent(total_secs),
        energy_estimate(total_secs, style.load_watts),
        style.energy_unit
    );
    debug!("timer: {total_secs}s -> {:?}", text);
    CounterDisplay { text }
}

/// Parse the host's counter text and render it.
pub fn format_counter_text(text: &str, style: &TimerStyle) -> Result<CounterDisplay> {
    let total = parse_counter(text)?;
    Ok(format_run_timer(total, style))
}
