use crate::record::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One enriched record per input line, handed to a sink and then dropped.
///
/// `clock`, `status` and `hardware_id` are snapshots of the owning session
/// after the line was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceEvent {
    pub time: DateTime<Utc>,
    pub device_id: u32,
    pub level: Level,
    pub source: String,
    pub message: String,
    pub clock: String,
    pub status: String,
    pub hardware_id: String,
}

impl DeviceEvent {
    /// First letter of the status, used as a compact prefix in traces.
    pub fn status_initial(&self) -> char {
        self.status.chars().next().unwrap_or('?')
    }

    /// `NODE#<id>`, the label each device is logged under.
    pub fn node_label(&self) -> String {
        node_label(self.device_id)
    }
}

pub fn node_label(device_id: u32) -> String {
    format!("NODE#{device_id}")
}
