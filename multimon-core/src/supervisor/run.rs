use crate::conf::MonitorConfig;
use crate::session::DeviceSession;
use crate::sink::{EventSink, sink_for};
use crate::supervisor::registry::TransportRegistry;
use crate::transport::{TransportEntry, discover, open_serial};
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;

/// Why [`supervise`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// The shutdown signal fired and every transport was asked to close.
    Interrupted,
    /// Every transport reached end of stream on its own.
    Drained,
}

/// Discover, bind and monitor every transport until interrupted.
///
/// A discovery failure is returned to the caller and aborts startup.
/// Transports that fail to open are logged and skipped.
pub async fn run(cfg: &MonitorConfig) -> Result<()> {
    let entries = discover(&cfg.transport.dir, &cfg.transport.pattern)?;
    tracing::info!(
        dir = %cfg.transport.dir.display(),
        found = entries.len(),
        "transport discovery complete"
    );

    let (sink, writer) = sink_for(cfg.output.format);
    let mut registry = bind_all(cfg, entries, sink);

    if registry.is_empty() {
        tracing::warn!("no transports bound, nothing to monitor");
        return Ok(());
    }

    let outcome = supervise(&mut registry, interrupt()).await;
    tracing::debug!(?outcome, "supervisor stopped");

    // Aborted tasks may still hold the sink; only a drained run is flushed.
    if outcome == Shutdown::Drained {
        drop(registry);
        writer.finish().await?;
    }

    Ok(())
}

/// Open every discovered transport and bind a fresh session to it.
pub fn bind_all(
    cfg: &MonitorConfig,
    entries: Vec<TransportEntry>,
    sink: Arc<dyn EventSink>,
) -> TransportRegistry {
    let mut registry = TransportRegistry::new();

    for entry in entries {
        tracing::info!(path = %entry.path.display(), "opening transport");

        match open_serial(&entry, cfg.transport.baud_rate) {
            Ok(reader) => {
                let session = DeviceSession::new(entry.device_id).with_verbose(cfg.output.verbose);
                registry.bind(entry, reader, session, sink.clone());
            }
            Err(e) => {
                tracing::warn!(device = entry.device_id, error = %e, "skipping transport");
            }
        }
    }

    registry
}

/// Wait for `shutdown` or for every transport to end, whichever comes first.
///
/// On shutdown every transport is closed without waiting for confirmation.
pub async fn supervise<F>(registry: &mut TransportRegistry, shutdown: F) -> Shutdown
where
    F: Future<Output = ()>,
{
    let outcome = tokio::select! {
        _ = shutdown => Shutdown::Interrupted,
        _ = registry.wait_all() => Shutdown::Drained,
    };

    match outcome {
        Shutdown::Interrupted => {
            let closed = registry.close_all();
            tracing::info!(closed, "ttys closed");
        }
        Shutdown::Drained => tracing::info!("all transports ended"),
    }

    outcome
}

/// Resolves on the first SIGINT.
async fn interrupt() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("SIGINT received"),
        Err(e) => {
            // Without a signal listener the monitor can only end by draining.
            tracing::error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    }
}
