//! Inbound host events and outbound application events.
//!
//! The host hands a [`WidgetEvent`] to the
//! [`WidgetService`](super::service::WidgetService) on every refresh tick.
//! The service answers with a [`Rendered`] record and reports what happened
//! through the [`EventSink`](super::ports::EventSink) port as [`AppEvent`]s.

use core::fmt;

use crate::error::Error;
use crate::widgets::{CounterDisplay, StatusDisplay};

/// Raw input for one widget refresh, as the host delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Security panel status widget; `last_payload` is empty when the
    /// panel has not published anything.
    AlarmStatus { last_payload: String },
    /// Run-timer widget; `text` holds the elapsed seconds.
    RunTimer { text: String },
}

impl WidgetEvent {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::AlarmStatus { .. } => WidgetKind::AlarmStatus,
            Self::RunTimer { .. } => WidgetKind::RunTimer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    AlarmStatus,
    RunTimer,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlarmStatus => write!(f, "alarm-status"),
            Self::RunTimer => write!(f, "run-timer"),
        }
    }
}

/// A formatted widget ready for the host's rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Status(StatusDisplay),
    Counter(CounterDisplay),
}

impl Rendered {
    pub fn text(&self) -> &str {
        match self {
            Self::Status(d) => &d.text,
            Self::Counter(d) => &d.text,
        }
    }
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A widget was formatted successfully.
    Rendered(Rendered),

    /// A widget event could not be formatted; the host keeps its previous display.
    Rejected { widget: WidgetKind, error: Error },

    /// A new configuration has been applied.
    ConfigChanged,
}
