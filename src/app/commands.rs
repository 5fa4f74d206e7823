//! Inbound commands to the application service.
//!
//! These represent actions requested by the host (settings screen,
//! provisioning, diagnostics) that the
//! [`WidgetService`](super::service::WidgetService) interprets and acts upon.

use crate::config::WidgetConfig;

/// Commands that the host can send into the application core.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Hot-swap the configuration. Rejected unless it validates.
    UpdateConfig(WidgetConfig),

    /// Persist the current config through the config port.
    SaveConfig,

    /// Zero the rendered/rejected counters.
    ResetStats,
}
