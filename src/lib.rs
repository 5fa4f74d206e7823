//! Dashboard widget formatters.
//!
//! Turns raw widget events from a home-automation dashboard host into the
//! text, colour and blink cues the host renders. The formatters in
//! [`widgets`] are pure; [`app`] wires them to the host through port
//! traits and [`adapters`] provides host-side implementations.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod colour;
pub mod config;
pub mod error;
pub mod widgets;

pub use error::{Error, Result};
