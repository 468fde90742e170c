use crate::session::DeviceEvent;
use crate::sink::{EventSink, LineWriter};
use std::io;

/// One JSON object per line.
pub struct JsonSink {
    out: LineWriter,
}

impl JsonSink {
    pub fn new(out: LineWriter) -> Self {
        Self { out }
    }

    pub fn render(event: &DeviceEvent) -> io::Result<String> {
        serde_json::to_string(event).map_err(io::Error::other)
    }
}

impl EventSink for JsonSink {
    fn emit(&self, event: &DeviceEvent) -> io::Result<()> {
        self.out.send(Self::render(event)?)
    }
}
