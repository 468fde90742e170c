use crate::record::{Level, LogRecord, StatusChange, parse_own_ndi, parse_record, parse_status_change};
use pretty_assertions::assert_eq;

#[test]
fn parse_record_extracts_all_fields() {
    let line = "I (120) snail.c: Status change: OFFLINE => ONLINE, v: 0\x1B";

    let record = parse_record(line).expect("structured line");

    assert_eq!(
        record,
        LogRecord {
            level: Level::Info,
            ticks: "120",
            source: "snail.c",
            message: "Status change: OFFLINE => ONLINE, v: 0",
        }
    );
}

#[test]
fn parse_record_accepts_every_level_letter() {
    for (letter, level) in [
        ("I", Level::Info),
        ("D", Level::Debug),
        ("W", Level::Warn),
        ("E", Level::Error),
    ] {
        let line = format!("{letter} (1) main.c: hello\x1B");
        assert_eq!(parse_record(&line).map(|r| r.level), Some(level));
    }
}

#[test]
fn parse_record_skips_colour_prefix() {
    // Firmware built with coloured logs wraps each line in SGR escapes.
    let line = "\x1B[0;32mI (5316) nanr.c: NAN Initialized\x1B[0m";

    let record = parse_record(line).expect("structured line");

    assert_eq!(record.ticks, "5316");
    assert_eq!(record.source, "nanr.c");
    assert_eq!(record.message, "NAN Initialized");
}

#[test]
fn parse_record_requires_terminator() {
    assert_eq!(parse_record("I (120) snail.c: no escape at the end"), None);
}

#[test]
fn parse_record_rejects_unknown_level() {
    assert_eq!(parse_record("V (120) snail.c: verbose\x1B"), None);
}

#[test]
fn parse_record_rejects_unstructured_text() {
    assert_eq!(parse_record("garbage unstructured text"), None);
    assert_eq!(parse_record(""), None);
}

#[test]
fn parse_record_keeps_ticks_as_captured_text() {
    let wide = parse_record("I (18446744073709551616) main.c: past u64\x1B").expect("structured line");
    assert_eq!(wide.ticks, "18446744073709551616");

    let padded = parse_record("I (0120) main.c: x\x1B").expect("structured line");
    assert_eq!(padded.ticks, "0120");
}

#[test]
fn parse_record_message_does_not_span_line_terminators() {
    assert_eq!(parse_record("I (5) main.c: a\rb\x1B"), None);
    assert_eq!(parse_record("I (5) main.c: a\u{2028}b\x1B"), None);
    assert_eq!(parse_record("I (5) main.c: a\u{2029}b\x1B"), None);
}

#[test]
fn parse_record_message_extends_to_last_escape() {
    let record = parse_record("W (9) rpc.c: \x1B[1mbold\x1B[0m tail\x1B").expect("structured line");
    assert_eq!(record.message, "\x1B[1mbold\x1B[0m tail");
}

#[test]
fn parse_status_change_captures_transition() {
    let change = parse_status_change("Status change: ONLINE => ERROR, v: 1").expect("match");

    assert_eq!(
        change,
        StatusChange {
            next: "ERROR",
            flag: "1",
        }
    );
    assert!(!change.is_committed());
}

#[test]
fn parse_status_change_zero_flag_is_committed() {
    let change = parse_status_change("Status change: OFFLINE => ONLINE, v: 0").expect("match");
    assert!(change.is_committed());
}

#[test]
fn parse_status_change_ignores_other_messages() {
    assert_eq!(parse_status_change("Changing state [INFORM] => [LEAVE]"), None);
}

#[test]
fn parse_own_ndi_is_case_insensitive_and_preserves_case() {
    assert_eq!(
        parse_own_ndi("own_ndi: AA:BB:CC:11:22:33"),
        Some("AA:BB:CC:11:22:33")
    );
    assert_eq!(
        parse_own_ndi("own_ndi: aa:bb:cc:11:22:3f"),
        Some("aa:bb:cc:11:22:3f")
    );
}

#[test]
fn parse_own_ndi_rejects_short_identifier() {
    assert_eq!(parse_own_ndi("own_ndi: AA:BB:CC:11:22"), None);
}
