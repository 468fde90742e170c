use crate::conf::MonitorConfig;
use crate::session::DeviceSession;
use crate::sink::sink_for;
use crate::supervisor::route_lines;
use crate::transport::LineReader;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::BufReader;

/// Decode a captured log offline through a single session.
///
/// Reads `input`, or stdin when no path is given.
pub async fn run_decode(cfg: &MonitorConfig, input: Option<PathBuf>, device_id: u32) -> Result<()> {
    let (sink, writer) = sink_for(cfg.output.format);
    let mut session = DeviceSession::new(device_id).with_verbose(cfg.output.verbose);

    let count = match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut lines = LineReader::new(BufReader::new(file));
            route_lines(&mut session, &mut lines, sink.as_ref())
                .await
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut lines = LineReader::new(BufReader::new(tokio::io::stdin()));
            route_lines(&mut session, &mut lines, sink.as_ref())
                .await
                .context("failed to read stdin")?
        }
    };

    drop(sink);
    writer.finish().await.context("failed to write decoded output")?;

    tracing::info!(
        lines = count,
        clock = session.clock(),
        status = session.status(),
        hardware_id = session.hardware_id(),
        "decode finished"
    );

    Ok(())
}
