use crate::record::types::{Level, LogRecord, StatusChange};
use once_cell::sync::Lazy;
use regex_lite::Regex;

static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([IDWE]) \((\d+)\) ([^:]+): ([^\r\n\x{2028}\x{2029}]+)\x1B")
        .expect("record pattern compiles")
});

static STATUS_CHANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Status change: \w+ => (\w+), v: (\d)").expect("status pattern compiles")
});

static OWN_NDI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)own_ndi: ([0-9A-F]{2}:[0-9A-F]{2}:[0-9A-F]{2}:[0-9A-F]{2}:[0-9A-F]{2}:[0-9A-F]{2})",
    )
    .expect("own_ndi pattern compiles")
});

/// Match a raw line against the structured record format.
///
/// The search is unanchored so colour escapes emitted ahead of the level
/// letter are skipped. The message may not span a line terminator (`\r`,
/// U+2028, U+2029). Ticks are kept as the captured digits, leading zeros
/// included, so no structured line is ever rejected for its tick value.
pub fn parse_record(line: &str) -> Option<LogRecord<'_>> {
    let caps = RECORD.captures(line)?;

    let level = Level::from_letter(caps.get(1)?.as_str())?;
    let ticks = caps.get(2)?.as_str();

    Some(LogRecord {
        level,
        ticks,
        source: caps.get(3)?.as_str(),
        message: caps.get(4)?.as_str(),
    })
}

pub fn parse_status_change(message: &str) -> Option<StatusChange<'_>> {
    let caps = STATUS_CHANGE.captures(message)?;

    Some(StatusChange {
        next: caps.get(1)?.as_str(),
        flag: caps.get(2)?.as_str(),
    })
}

/// Extract the MAC-like identifier from an `own_ndi:` message, case preserved.
pub fn parse_own_ndi(message: &str) -> Option<&str> {
    OWN_NDI
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
