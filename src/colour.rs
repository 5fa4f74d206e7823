//! Display colours.
//!
//! The dashboard host takes text colours as `#RRGGBB` strings. [`Colour`]
//! keeps the value as an RGB triple and only turns it back into a string at
//! the serialisation boundary, so palettes can be compared and validated.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A 24-bit text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Alert red, used for alarms and the unavailable fallback.
    pub const ALERT_RED: Self = Self::new(0xFF, 0x00, 0x00);
    /// Yellow-green, disarmed with nothing to report.
    pub const QUIET_GREEN: Self = Self::new(0x9A, 0xCD, 0x32);
    /// Yellow, armed with nothing to report.
    pub const ARMED_YELLOW: Self = Self::new(0xFF, 0xFF, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Why a colour string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColourError {
    /// Missing the leading `#`.
    MissingHash,
    /// Not exactly six hex digits after the `#`.
    BadLength,
    /// A non-hex character.
    BadDigit,
}

impl fmt::Display for ParseColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "colour must start with '#'"),
            Self::BadLength => write!(f, "colour must have six hex digits"),
            Self::BadDigit => write!(f, "colour contains a non-hex digit"),
        }
    }
}

impl std::error::Error for ParseColourError {}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColourError::MissingHash)?;
        if hex.len() != 6 {
            return Err(ParseColourError::BadLength);
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColourError::BadDigit);
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColourError::BadDigit)
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
