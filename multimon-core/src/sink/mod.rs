//! Destinations for [`DeviceEvent`]s.
//!
//! Every routing task shares one sink, so implementations take `&self` and
//! must be `Send + Sync`. A failing sink never feeds back into a session.

mod collect;
mod json;
mod pretty;
mod writer;

pub use collect::CollectingSink;
pub use json::JsonSink;
pub use pretty::PrettySink;
pub use writer::{LineWriter, WriterHandle};

use crate::conf::types::OutputFormat;
use crate::session::DeviceEvent;
use std::io::{self, IsTerminal};
use std::sync::Arc;

pub trait EventSink: Send + Sync {
    fn emit(&self, event: &DeviceEvent) -> io::Result<()>;
}

/// Build the sink selected by the output configuration, writing to stdout.
///
/// Drop every clone of the sink before finishing the handle, otherwise the
/// writer keeps waiting for more lines.
pub fn sink_for(format: OutputFormat) -> (Arc<dyn EventSink>, WriterHandle) {
    let (out, handle) = LineWriter::stdout();
    let sink: Arc<dyn EventSink> = match format {
        OutputFormat::Pretty => Arc::new(PrettySink::new(io::stdout().is_terminal(), out)),
        OutputFormat::Json => Arc::new(JsonSink::new(out)),
    };
    (sink, handle)
}
