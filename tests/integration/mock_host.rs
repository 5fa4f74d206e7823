//! Mock dashboard host for integration tests.
//!
//! Records every event the service emits so tests can assert on the full
//! history, and offers a config port that can be told to fail.

use dashwidgets::app::events::{AppEvent, Rendered};
use dashwidgets::app::ports::{ConfigError, ConfigPort, EventSink};
use dashwidgets::config::WidgetConfig;
use std::cell::{Cell, RefCell};

// ── Recording sink ────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn last(&self) -> Option<&AppEvent> {
        self.events.last()
    }

    pub fn rendered(&self) -> Vec<&Rendered> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Rendered(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn rejected_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Rejected { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Config port with fault injection ──────────────────────────

pub struct FlakyConfigPort {
    pub stored: RefCell<Option<WidgetConfig>>,
    pub fail_with: Cell<Option<ConfigError>>,
    pub saves: Cell<u32>,
}

#[allow(dead_code)]
impl FlakyConfigPort {
    pub fn new() -> Self {
        Self {
            stored: RefCell::new(None),
            fail_with: Cell::new(None),
            saves: Cell::new(0),
        }
    }

    pub fn failing(error: ConfigError) -> Self {
        let port = Self::new();
        port.fail_with.set(Some(error));
        port
    }
}

impl ConfigPort for FlakyConfigPort {
    fn load(&self) -> Result<WidgetConfig, ConfigError> {
        if let Some(e) = self.fail_with.get() {
            return Err(e);
        }
        self.stored.borrow().clone().ok_or(ConfigError::NotFound)
    }

    fn save(&self, config: &WidgetConfig) -> Result<(), ConfigError> {
        if let Some(e) = self.fail_with.get() {
            return Err(e);
        }
        config.validate()?;
        *self.stored.borrow_mut() = Some(config.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// ── Payload builders ──────────────────────────────────────────

#[allow(dead_code)]
pub fn panel_payload(mode: i32, alarms: u32, summary: u32) -> String {
    serde_json::json!({
        "status": "Охрана отключена",
        "event": { "sensor": "Пульт 1", "time_short": "08.03 19:15" },
        "mode": mode,
        "alarms": alarms,
        "annunciator": { "summary": summary }
    })
    .to_string()
}
