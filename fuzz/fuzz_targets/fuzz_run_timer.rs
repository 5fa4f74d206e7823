//! Fuzz target: run-timer counter parsing and formatting
//!
//! Drives `format_counter_text` with arbitrary text and verifies:
//! - No panics, including on overflow-sized counters
//! - Successful renders always have three lines, the second ending in `%`
//!
//! cargo fuzz run fuzz_run_timer

#![no_main]

use dashwidgets::config::TimerStyle;
use dashwidgets::widgets::format_counter_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let style = TimerStyle::default();

    if let Ok(display) = format_counter_text(&text, &style) {
        let lines: Vec<&str> = display.text.split('\n').collect();
        assert_eq!(lines.len(), 3, "run timer renders three lines");
        assert!(lines[1].ends_with('%'));
        assert!(lines[2].ends_with(style.energy_unit.as_str()));
    }
});
