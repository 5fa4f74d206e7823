//! Widget configuration parameters
//!
//! All tunable presentation parameters for the dashboard widgets.
//! Values can be overridden by the host and persisted through a
//! [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::colour::Colour;

/// Upper bound for the metered load, in watts.
const MAX_LOAD_WATTS: u32 = 100_000;

/// Core widget configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub alarm: AlarmStyle,
    pub timer: TimerStyle,
}

/// Palette and fallback text for the alarm status widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmStyle {
    /// Disarmed, no active zones
    pub quiet_colour: Colour,
    /// Armed, no alarms recorded and no active zones
    pub armed_colour: Colour,
    /// Any alarm condition, and the unavailable fallback
    pub alert_colour: Colour,
    /// Shown when the panel has not published a payload
    pub unavailable_text: String,
}

impl Default for AlarmStyle {
    fn default() -> Self {
        Self {
            quiet_colour: Colour::QUIET_GREEN,
            armed_colour: Colour::ARMED_YELLOW,
            alert_colour: Colour::ALERT_RED,
            unavailable_text: "Устройство выключено или не доступно".into(),
        }
    }
}

/// Energy estimate parameters for the run-timer widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStyle {
    /// Nominal power draw of the metered load in watts
    pub load_watts: u32,
    /// Unit label appended to the energy line
    pub energy_unit: String,
}

impl Default for TimerStyle {
    fn default() -> Self {
        Self {
            load_watts: 19,
            energy_unit: "кВт/ч".into(),
        }
    }
}

impl WidgetConfig {
    /// Range and consistency checks. Run before a config is applied or persisted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alarm = &self.alarm;
        if alarm.unavailable_text.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "alarm.unavailable_text must not be empty",
            ));
        }
        if alarm.alert_colour == alarm.quiet_colour || alarm.alert_colour == alarm.armed_colour {
            return Err(ConfigError::ValidationFailed(
                "alarm.alert_colour must differ from quiet and armed colours",
            ));
        }
        if !(1..=MAX_LOAD_WATTS).contains(&self.timer.load_watts) {
            return Err(ConfigError::ValidationFailed(
                "timer.load_watts must be 1–100000",
            ));
        }
        if self.timer.energy_unit.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "timer.energy_unit must not be empty",
            ));
        }
        Ok(())
    }

    /// Encode as a compact blob for key/value storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::IoError)
    }

    /// Decode a blob written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)
    }
}
