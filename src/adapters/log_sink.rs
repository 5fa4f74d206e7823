//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to whatever
//! logger the host installed. Useful as a default sink or alongside the
//! host's real rendering sink while debugging a dashboard.

use log::{info, warn};

use crate::app::events::{AppEvent, Rendered};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Rendered(Rendered::Status(d)) => {
                info!(
                    "ALARM | colour={} blink={} | {}",
                    d.text_color,
                    d.blink,
                    d.text.replace('\n', " / ")
                );
            }
            AppEvent::Rendered(Rendered::Counter(d)) => {
                info!("TIMER | {}", d.text.replace('\n', " / "));
            }
            AppEvent::Rejected { widget, error } => {
                warn!("REJECT | {} | {}", widget, error);
            }
            AppEvent::ConfigChanged => {
                info!("CONFIG | updated");
            }
        }
    }
}
