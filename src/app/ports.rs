//! Port traits: the hexagonal boundary between the widget core and the host.
//!
//! ```text
//!   Host adapter ──▶ Port trait ──▶ WidgetService (domain)
//! ```
//!
//! The dashboard host implements [`EventSink`] to receive rendered widgets
//! and [`StoragePort`] to offer a key/value backend. Configuration reaches
//! that backend through [`ConfigPort`], normally the
//! [`StorageConfig`](crate::adapters::StorageConfig) adapter. The [`WidgetService`](super::service::WidgetService) consumes
//! them via generics, so the formatters never touch the host directly.

use crate::config::WidgetConfig;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → host rendering / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (widget redraw,
/// debug console, MQTT echo, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists widget configuration.
///
/// Implementations MUST run [`WidgetConfig::validate`] before persisting
/// and report failures as [`ConfigError::ValidationFailed`], never clamp.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`ConfigError::NotFound`] if nothing has been stored yet.
    fn load(&self) -> Result<WidgetConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &WidgetConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Storage port (driven adapter: domain ↔ host key/value store)
// ───────────────────────────────────────────────────────────────

/// Key/value blob storage offered by the host.
///
/// Widget data lives under its own namespace so it cannot collide with
/// anything else the host keeps there.
pub trait StoragePort {
    /// Copy the blob into `buf` and return its length.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Store a blob, replacing any previous one.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Remove a blob. Removing a missing key is not an error.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Whether a blob is stored under the key.
    fn exists(&self, namespace: &str, key: &str) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Underlying storage is full.
    StorageFull,
    /// Generic I/O error from the storage backend.
    IoError,
}

/// Errors from [`StoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Store is full.
    Full,
    /// Caller's buffer is smaller than the stored value.
    BufferTooSmall,
    /// Generic I/O error.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no stored config"),
            Self::Corrupted => write!(f, "stored config unreadable"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::StorageFull => write!(f, "storage full"),
            Self::IoError => write!(f, "storage I/O failure"),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "no blob under key"),
            Self::Full => write!(f, "backend full"),
            Self::BufferTooSmall => write!(f, "blob larger than read buffer"),
            Self::IoError => write!(f, "backend I/O failure"),
        }
    }
}

impl From<StorageError> for ConfigError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => Self::NotFound,
            StorageError::Full => Self::StorageFull,
            StorageError::BufferTooSmall | StorageError::IoError => Self::IoError,
        }
    }
}
