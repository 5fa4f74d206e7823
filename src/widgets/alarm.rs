//! Security panel status widget.
//!
//! The panel publishes a JSON status record on every change. The widget
//! shows three lines (panel status, last triggered sensor or remote, and
//! the time it fired) and picks a colour from the arm mode and the alarm
//! counters:
//!
//! | mode      | condition                            | state   |
//! |-----------|--------------------------------------|---------|
//! | disarmed  | active zones                         | Alert   |
//! | disarmed  | nothing active                       | Quiet   |
//! | armed     | alarms since arming or active zones  | Alert   |
//! | armed     | nothing recorded                     | Armed   |
//!
//! Only `Alert` blinks.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::AlarmStyle;
use crate::error::{PayloadError, Result};

/// Status record published by the security panel.
///
/// Fields the widget does not use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmPayload {
    /// Human-readable panel status line.
    pub status: String,
    /// Most recent sensor or remote event.
    pub event: LastEvent,
    /// Arm mode; 0 is disarmed, every other value is some armed mode.
    pub mode: i32,
    /// Alarm events recorded since the system was last armed.
    pub alarms: u32,
    pub annunciator: Annunciator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastEvent {
    pub sensor: String,
    pub time_short: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annunciator {
    /// Alarm zones active right now.
    pub summary: u32,
}

impl AlarmPayload {
    pub fn parse(json: &str) -> core::result::Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_armed(&self) -> bool {
        self.mode != 0
    }

    pub fn panel_state(&self) -> PanelState {
        let zones_active = self.annunciator.summary > 0;
        if self.is_armed() {
            if self.alarms > 0 || zones_active {
                PanelState::Alert
            } else {
                PanelState::Armed
            }
        } else if zones_active {
            PanelState::Alert
        } else {
            PanelState::Quiet
        }
    }

    /// The three display lines joined with `\n`.
    pub fn display_text(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.status, self.event.sensor, self.event.time_short
        )
    }
}

/// Visual severity of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Disarmed and nothing active.
    Quiet,
    /// Armed and nothing recorded.
    Armed,
    /// Something needs attention.
    Alert,
}

impl PanelState {
    pub fn colour(self, style: &AlarmStyle) -> Colour {
        match self {
            Self::Quiet => style.quiet_colour,
            Self::Armed => style.armed_colour,
            Self::Alert => style.alert_colour,
        }
    }

    pub fn blinks(self) -> bool {
        self == Self::Alert
    }
}

/// Rendered alarm widget, field names as the host expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub text: String,
    pub text_color: Colour,
    pub blink: bool,
}

impl StatusDisplay {
    /// Fallback when the panel has published nothing.
    pub fn unavailable(style: &AlarmStyle) -> Self {
        Self {
            text: style.unavailable_text.clone(),
            text_color: style.alert_colour,
            blink: true,
        }
    }

    pub fn from_payload(payload: &AlarmPayload, style: &AlarmStyle) -> Self {
        let state = payload.panel_state();
        Self {
            text: payload.display_text(),
            text_color: state.colour(style),
            blink: state.blinks(),
        }
    }
}

/// Render the widget from the last payload the host received.
///
/// An empty payload means the panel is offline and renders the fallback.
/// Anything else must parse as an [`AlarmPayload`].
pub fn format_alarm_status(last_payload: &str, style: &AlarmStyle) -> Result<StatusDisplay> {
    if last_payload.is_empty() {
        debug!("alarm: no payload, panel unavailable");
        return Ok(StatusDisplay::unavailable(style));
    }

    let payload = AlarmPayload::parse(last_payload)?;
    let display = StatusDisplay::from_payload(&payload, style);
    debug!(
        "alarm: mode={} alarms={} zones={} -> {} blink={}",
        payload.mode, payload.alarms, payload.annunciator.summary, display.text_color, display.blink
    );
    Ok(display)
}
