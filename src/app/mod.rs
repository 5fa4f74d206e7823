//! Application core: dispatch and configuration, zero host I/O.
//!
//! This module routes host widget events to the formatters in
//! [`crate::widgets`] and manages the active configuration.
//! All interaction with the host happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable with mock adapters.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
