use crate::record::{
    Level, LogRecord, NDI_SOURCE, STATUS_SOURCE, parse_own_ndi, parse_record, parse_status_change,
};
use crate::session::event::{DeviceEvent, node_label};
use chrono::{DateTime, Utc};

pub const INITIAL_CLOCK: &str = "0";
pub const INITIAL_STATUS: &str = "OFFLINE";
pub const UNKNOWN_HARDWARE_ID: &str = "--:--:--:--:--:--";
pub const UNMATCHED_SOURCE: &str = "_";

/// Per-device accumulator turning raw lines into [`DeviceEvent`]s.
///
/// The clock, status and hardware id are sticky: a line that does not carry a
/// new value leaves the previous one in place. There is no transition table;
/// any status may follow any other.
#[derive(Debug, Clone)]
pub struct DeviceSession {
    device_id: u32,
    clock: String,
    status: String,
    hardware_id: String,
    verbose: bool,
}

impl DeviceSession {
    pub fn new(device_id: u32) -> Self {
        Self {
            device_id,
            clock: INITIAL_CLOCK.to_string(),
            status: INITIAL_STATUS.to_string(),
            hardware_id: UNKNOWN_HARDWARE_ID.to_string(),
            verbose: false,
        }
    }

    /// Emit a one-line trace per processed line through `tracing`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn device_id(&self) -> u32 {
        self.device_id
    }

    pub fn clock(&self) -> &str {
        &self.clock
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn hardware_id(&self) -> &str {
        &self.hardware_id
    }

    pub fn process_line(&mut self, raw_line: &str) -> DeviceEvent {
        self.process_line_at(raw_line, Utc::now())
    }

    /// Same as [`process_line`](Self::process_line) with an explicit receive time.
    pub fn process_line_at(&mut self, raw_line: &str, time: DateTime<Utc>) -> DeviceEvent {
        let (level, source, message) = match parse_record(raw_line) {
            Some(record) => {
                self.apply(&record);
                (record.level, record.source, record.message)
            }
            None => (Level::None, UNMATCHED_SOURCE, raw_line),
        };

        let event = DeviceEvent {
            time,
            device_id: self.device_id,
            level,
            source: source.to_string(),
            message: message.to_string(),
            clock: self.clock.clone(),
            status: self.status.clone(),
            hardware_id: self.hardware_id.clone(),
        };

        if self.verbose {
            trace_event(&event);
        }

        event
    }

    fn apply(&mut self, record: &LogRecord<'_>) {
        self.clock = record.ticks.to_string();

        match record.source {
            STATUS_SOURCE => {
                if let Some(change) = parse_status_change(record.message) {
                    if change.is_committed() {
                        self.status = change.next.to_string();
                    }
                }
            }
            NDI_SOURCE => {
                if let Some(ndi) = parse_own_ndi(record.message) {
                    self.hardware_id = ndi.to_string();
                }
            }
            _ => {}
        }
    }
}

fn trace_event(event: &DeviceEvent) {
    tracing::info!(
        target: "multimon::device",
        device = %node_label(event.device_id),
        "{}> {} ({}) {}",
        event.status_initial(),
        event.level,
        event.source,
        event.message
    );
}
