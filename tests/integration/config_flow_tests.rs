//! Config load / update / save through the ports.

use dashwidgets::adapters::{MemoryStore, StorageConfig};
use dashwidgets::adapters::config_store::{CONFIG_KEY, CONFIG_NAMESPACE};
use dashwidgets::app::commands::AppCommand;
use dashwidgets::app::events::{AppEvent, WidgetEvent};
use dashwidgets::app::ports::{ConfigError, ConfigPort, StoragePort};
use dashwidgets::app::service::{ServiceStats, WidgetService};
use dashwidgets::colour::Colour;
use dashwidgets::config::WidgetConfig;
use dashwidgets::error::Error;

use super::mock_host::{FlakyConfigPort, RecordingSink};

#[test]
fn empty_store_starts_with_defaults() {
    let store = StorageConfig::new(MemoryStore::new());
    let app = WidgetService::from_config_port(&store).unwrap();
    assert_eq!(app.config(), &WidgetConfig::default());
    assert!(!app.is_config_dirty());
}

#[test]
fn stored_config_is_loaded() {
    let store = StorageConfig::new(MemoryStore::new());
    let mut cfg = WidgetConfig::default();
    cfg.alarm.armed_colour = Colour::new(0xFF, 0xA5, 0x00);
    store.save(&cfg).unwrap();

    let app = WidgetService::from_config_port(&store).unwrap();
    assert_eq!(app.config().alarm.armed_colour.to_string(), "#FFA500");
}

#[test]
fn service_saves_through_host_storage() {
    let port = StorageConfig::new(MemoryStore::new());
    let mut app = WidgetService::from_config_port(&port).unwrap();
    let mut sink = RecordingSink::new();

    let mut cfg = WidgetConfig::default();
    cfg.timer.load_watts = 40;
    app.execute(AppCommand::UpdateConfig(cfg.clone()), &port, &mut sink)
        .unwrap();
    app.execute(AppCommand::SaveConfig, &port, &mut sink).unwrap();

    let reloaded = WidgetService::from_config_port(&port).unwrap();
    assert_eq!(reloaded.config(), &cfg);

    let store = port.into_inner();
    assert!(store.exists(CONFIG_NAMESPACE, CONFIG_KEY));
}

#[test]
fn garbage_in_host_storage_fails_startup() {
    let mut store = MemoryStore::new();
    store.write(CONFIG_NAMESPACE, CONFIG_KEY, b"\xFF").unwrap();
    let port = StorageConfig::new(store);
    assert!(matches!(
        WidgetService::from_config_port(&port),
        Err(Error::Config(ConfigError::Corrupted))
    ));
}

#[test]
fn corrupted_store_is_an_error() {
    let port = FlakyConfigPort::failing(ConfigError::Corrupted);
    assert!(matches!(
        WidgetService::from_config_port(&port),
        Err(Error::Config(ConfigError::Corrupted))
    ));
}

#[test]
fn update_then_save_persists() {
    let port = FlakyConfigPort::new();
    let mut app = WidgetService::from_config_port(&port).unwrap();
    let mut sink = RecordingSink::new();

    let mut cfg = WidgetConfig::default();
    cfg.alarm.unavailable_text = "Панель не отвечает".into();
    app.execute(AppCommand::UpdateConfig(cfg.clone()), &port, &mut sink)
        .unwrap();
    assert_eq!(sink.last(), Some(&AppEvent::ConfigChanged));
    assert!(app.is_config_dirty());

    let rendered = app
        .handle(
            &WidgetEvent::AlarmStatus {
                last_payload: String::new(),
            },
            &mut sink,
        )
        .unwrap();
    assert_eq!(rendered.text(), "Панель не отвечает");

    app.execute(AppCommand::SaveConfig, &port, &mut sink).unwrap();
    assert!(!app.is_config_dirty());
    assert_eq!(port.stored.borrow().as_ref(), Some(&cfg));
}

#[test]
fn invalid_update_keeps_previous_config() {
    let port = FlakyConfigPort::new();
    let mut app = WidgetService::new(WidgetConfig::default());
    let mut sink = RecordingSink::new();

    let mut bad = WidgetConfig::default();
    bad.alarm.alert_colour = bad.alarm.armed_colour;
    let err = app
        .execute(AppCommand::UpdateConfig(bad), &port, &mut sink)
        .unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ValidationFailed(_))));
    assert_eq!(app.config(), &WidgetConfig::default());
    assert!(sink.events.is_empty());
}

#[test]
fn save_failure_keeps_config_dirty() {
    let port = FlakyConfigPort::new();
    let mut app = WidgetService::new(WidgetConfig::default());
    let mut sink = RecordingSink::new();

    let mut cfg = WidgetConfig::default();
    cfg.timer.load_watts = 25;
    app.execute(AppCommand::UpdateConfig(cfg), &port, &mut sink)
        .unwrap();

    port.fail_with.set(Some(ConfigError::StorageFull));
    app.force_save_if_dirty(&port);
    assert!(app.is_config_dirty());

    port.fail_with.set(None);
    app.force_save_if_dirty(&port);
    assert!(!app.is_config_dirty());
    assert_eq!(port.saves.get(), 1);
}

#[test]
fn reset_stats_zeroes_counters() {
    let port = FlakyConfigPort::new();
    let mut app = WidgetService::new(WidgetConfig::default());
    let mut sink = RecordingSink::new();

    app.handle(&WidgetEvent::RunTimer { text: "1".into() }, &mut sink)
        .unwrap();
    app.execute(AppCommand::ResetStats, &port, &mut sink).unwrap();
    assert_eq!(app.stats(), ServiceStats::default());
}
