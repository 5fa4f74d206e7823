//! Widget formatters. Pure functions, no I/O.
//!
//! Each formatter takes the host's raw input plus its style section of
//! [`WidgetConfig`](crate::config::WidgetConfig) and returns the record the
//! host renders. Nothing here keeps state between calls.

pub mod alarm;
pub mod timer;

pub use alarm::{AlarmPayload, PanelState, StatusDisplay, format_alarm_status};
pub use timer::{CounterDisplay, format_counter_text, format_run_timer, parse_counter};
