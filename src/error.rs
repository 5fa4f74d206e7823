//! Unified error types for the widget formatters.
//!
//! A single `Error` enum that every formatter and the application service
//! convert into. All variants are `Copy` so they can be handed to the
//! event sink and returned to the host without allocation.

use core::fmt;

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The alarm panel payload could not be parsed.
    Payload(PayloadError),
    /// The run-timer counter text is not a usable seconds count.
    Counter(CounterError),
    /// Configuration is invalid or could not be loaded/persisted.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload(e) => write!(f, "payload: {e}"),
            Self::Counter(e) => write!(f, "counter: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Payload errors
// ---------------------------------------------------------------------------

/// Broad class of a payload parse failure, mirroring serde_json's categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadErrorKind {
    /// Not valid JSON.
    Syntax,
    /// Valid JSON with the wrong shape (missing field, wrong type, negative count).
    Data,
    /// Input ended in the middle of a value.
    Eof,
    /// Reader failure. Unreachable for in-memory strings.
    Io,
}

/// Where and why a status payload failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadError {
    pub kind: PayloadErrorKind,
    /// 1-based line of the offending character, 0 when unknown.
    pub line: usize,
    /// 1-based column of the offending character, 0 when unknown.
    pub column: usize,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            PayloadErrorKind::Syntax => "malformed JSON",
            PayloadErrorKind::Data => "unexpected payload shape",
            PayloadErrorKind::Eof => "truncated JSON",
            PayloadErrorKind::Io => "read failure",
        };
        write!(f, "{what} at line {} column {}", self.line, self.column)
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match e.classify() {
            Category::Syntax => PayloadErrorKind::Syntax,
            Category::Data => PayloadErrorKind::Data,
            Category::Eof => PayloadErrorKind::Eof,
            Category::Io => PayloadErrorKind::Io,
        };
        Self {
            kind,
            line: e.line(),
            column: e.column(),
        }
    }
}

impl From<PayloadError> for Error {
    fn from(e: PayloadError) -> Self {
        Self::Payload(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e.into())
    }
}

// ---------------------------------------------------------------------------
// Counter errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    /// The counter text was empty or whitespace.
    Empty,
    /// The counter text is not an integer.
    NotANumber,
    /// Elapsed time cannot be negative.
    Negative,
}

impl fmt::Display for CounterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty counter"),
            Self::NotANumber => write!(f, "counter is not a whole number of seconds"),
            Self::Negative => write!(f, "negative counter"),
        }
    }
}

impl From<CounterError> for Error {
    fn from(e: CounterError) -> Self {
        Self::Counter(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
