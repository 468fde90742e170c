use crate::record::Level;
use crate::session::DeviceEvent;
use crate::sink::{EventSink, LineWriter};
use owo_colors::OwoColorize;
use std::io;

/// Human-readable line per event:
/// `12:00:01.250 NODE#1 [120] O> I (snail.c) message`.
pub struct PrettySink {
    color: bool,
    out: LineWriter,
}

impl PrettySink {
    pub fn new(color: bool, out: LineWriter) -> Self {
        Self { color, out }
    }

    pub fn render(event: &DeviceEvent, color: bool) -> String {
        let head = format!(
            "{} {} [{}] {}>",
            event.time.format("%H:%M:%S%.3f"),
            event.node_label(),
            event.clock,
            event.status_initial()
        );
        let body = format!("{} ({}) {}", event.level, event.source, event.message);

        if !color {
            return format!("{head} {body}");
        }

        let body = match event.level {
            Level::Error => body.red().to_string(),
            Level::Warn => body.yellow().to_string(),
            Level::Info => body.green().to_string(),
            Level::Debug => body.blue().to_string(),
            Level::None => body.dimmed().to_string(),
        };
        format!("{} {body}", head.bold())
    }
}

impl EventSink for PrettySink {
    fn emit(&self, event: &DeviceEvent) -> io::Result<()> {
        self.out.send(Self::render(event, self.color))
    }
}
