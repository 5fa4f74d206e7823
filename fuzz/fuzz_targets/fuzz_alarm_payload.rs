//! Fuzz target: alarm status payload parser
//!
//! Feeds arbitrary UTF-8 into the alarm formatter and verifies:
//! - No panics on any input
//! - Every successful render has exactly three lines of text or is the
//!   unavailable fallback
//! - Blink is set exactly when the alert colour is used
//!
//! cargo fuzz run fuzz_alarm_payload

#![no_main]

use dashwidgets::config::AlarmStyle;
use dashwidgets::widgets::format_alarm_status;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(payload) = core::str::from_utf8(data) else {
        return;
    };

    let style = AlarmStyle::default();
    let Ok(display) = format_alarm_status(payload, &style) else {
        return;
    };

    assert_eq!(
        display.blink,
        display.text_color == style.alert_colour,
        "blink must track the alert colour"
    );
    if payload.is_empty() {
        assert_eq!(display.text, style.unavailable_text);
    } else {
        assert!(
            display.text.matches('\n').count() >= 2,
            "status text must have at least three lines"
        );
    }
});
