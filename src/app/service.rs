//! Application service, the hexagonal core.
//!
//! [`WidgetService`] owns the active configuration and routes each host
//! [`WidgetEvent`] to its formatter. All output flows through the
//! [`EventSink`] port and all persistence through [`ConfigPort`], making
//! the service testable with mock adapters.
//!
//! ```text
//!  WidgetEvent ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                  │     WidgetService      │
//!   ConfigPort ◀──▶│  alarm · timer · cfg   │
//!                  └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::error::{Error, Result};
use crate::widgets::{format_alarm_status, format_counter_text};

use super::commands::AppCommand;
use super::events::{AppEvent, Rendered, WidgetEvent};
use super::ports::{ConfigError, ConfigPort, EventSink};

/// Outcome counters since startup or the last [`AppCommand::ResetStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub rendered: u64,
    pub rejected: u64,
}

// ───────────────────────────────────────────────────────────────
// WidgetService
// ───────────────────────────────────────────────────────────────

/// The application service dispatching widget events to formatters.
pub struct WidgetService {
    config: WidgetConfig,
    stats: ServiceStats,
    config_dirty: bool,
}

impl WidgetService {
    /// Construct the service from an already-validated configuration.
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config,
            stats: ServiceStats::default(),
            config_dirty: false,
        }
    }

    /// Construct the service from whatever the host has persisted.
    ///
    /// Falls back to defaults when nothing is stored. A corrupted or
    /// invalid stored config is an error; the host decides whether to
    /// reset it.
    pub fn from_config_port(port: &impl ConfigPort) -> Result<Self> {
        let config = match port.load() {
            Ok(config) => {
                config.validate()?;
                info!("WidgetService: loaded stored config");
                config
            }
            Err(ConfigError::NotFound) => {
                info!("WidgetService: no stored config, using defaults");
                WidgetConfig::default()
            }
            Err(e) => {
                warn!("WidgetService: config load failed: {}", e);
                return Err(e.into());
            }
        };
        Ok(Self::new(config))
    }

    // ── Per-event dispatch ────────────────────────────────────

    /// Format one widget event.
    ///
    /// Emits [`AppEvent::Rendered`] on success, [`AppEvent::Rejected`] on
    /// failure, and hands the same outcome back to the caller.
    pub fn handle(&mut self, event: &WidgetEvent, sink: &mut impl EventSink) -> Result<Rendered> {
        match self.render(event) {
            Ok(rendered) => {
                self.stats.rendered += 1;
                debug!("{} rendered", event.kind());
                sink.emit(&AppEvent::Rendered(rendered.clone()));
                Ok(rendered)
            }
            Err(error) => {
                self.stats.rejected += 1;
                warn!("{} rejected: {}", event.kind(), error);
                sink.emit(&AppEvent::Rejected {
                    widget: event.kind(),
                    error,
                });
                Err(error)
            }
        }
    }

    fn render(&self, event: &WidgetEvent) -> Result<Rendered> {
        match event {
            WidgetEvent::AlarmStatus { last_payload } => {
                format_alarm_status(last_payload, &self.config.alarm).map(Rendered::Status)
            }
            WidgetEvent::RunTimer { text } => {
                format_counter_text(text, &self.config.timer).map(Rendered::Counter)
            }
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a host command (settings screen, provisioning, diagnostics).
    pub fn execute(
        &mut self,
        cmd: AppCommand,
        port: &impl ConfigPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        match cmd {
            AppCommand::UpdateConfig(new_config) => {
                if let Err(e) = new_config.validate() {
                    warn!("Configuration update rejected: {}", e);
                    return Err(e.into());
                }
                self.config = new_config;
                self.config_dirty = true;
                info!("Configuration updated at runtime");
                sink.emit(&AppEvent::ConfigChanged);
            }
            AppCommand::SaveConfig => {
                port.save(&self.config).map_err(Error::from)?;
                self.config_dirty = false;
                info!("Config saved");
            }
            AppCommand::ResetStats => {
                self.stats = ServiceStats::default();
            }
        }
        Ok(())
    }

    /// Save if the config changed since the last save (call before the host shuts down).
    pub fn force_save_if_dirty(&mut self, port: &impl ConfigPort) {
        if !self.config_dirty {
            return;
        }
        match port.save(&self.config) {
            Ok(()) => {
                self.config_dirty = false;
                info!("Config force-saved before shutdown");
            }
            Err(e) => {
                warn!("Config force-save failed: {}", e);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn stats(&self) -> ServiceStats {
        self.stats
    }

    /// The live configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Whether the config has unsaved changes.
    pub fn is_config_dirty(&self) -> bool {
        self.config_dirty
    }
}
