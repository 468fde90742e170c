use crate::session::{DeviceSession, node_label};
use crate::sink::EventSink;
use crate::supervisor::route::route_lines;
use crate::transport::{LineReader, TransportEntry, TransportError};
use std::sync::Arc;
use tokio::io::AsyncBufRead;
use tokio::task::JoinHandle;

struct BoundTransport {
    entry: TransportEntry,
    task: JoinHandle<()>,
}

/// Every transport the supervisor has bound, each with its own routing task.
///
/// The routing task owns both the transport and its session, so aborting the
/// task closes the transport and drops any partially read line.
#[derive(Default)]
pub struct TransportRegistry {
    bound: Vec<BoundTransport>,
}

impl TransportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a routing task for `reader`, keyed by `entry.device_id`.
    pub fn bind<R>(
        &mut self,
        entry: TransportEntry,
        reader: R,
        session: DeviceSession,
        sink: Arc<dyn EventSink>,
    ) where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let path = entry.path.clone();
        let label = node_label(entry.device_id);

        let task = tokio::spawn(async move {
            let mut session = session;
            let mut lines = LineReader::new(reader);

            match route_lines(&mut session, &mut lines, sink.as_ref()).await {
                Ok(count) => {
                    tracing::info!(device = %label, path = %path.display(), lines = count, "transport closed");
                }
                Err(source) => {
                    let err = TransportError::Read { path, source };
                    tracing::error!(device = %label, error = %err, "transport failed");
                }
            }
        });

        tracing::debug!(device = entry.device_id, path = %entry.path.display(), "transport bound");
        self.bound.push(BoundTransport { entry, task });
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Request close on every transport without waiting for the tasks to wind down.
    ///
    /// Returns how many transports were still open.
    pub fn close_all(&mut self) -> usize {
        let mut closed = 0;

        for bound in self.bound.drain(..) {
            if !bound.task.is_finished() {
                closed += 1;
            }
            bound.task.abort();
            tracing::debug!(device = bound.entry.device_id, path = %bound.entry.path.display(), "transport close requested");
        }

        closed
    }

    /// Resolve once every routing task has ended on its own.
    ///
    /// Finished transports are removed as they complete, so the call may be
    /// cancelled and repeated safely.
    pub async fn wait_all(&mut self) {
        while let Some(bound) = self.bound.first_mut() {
            if let Err(e) = (&mut bound.task).await {
                if e.is_panic() {
                    tracing::error!(device = bound.entry.device_id, "routing task panicked");
                }
            }
            self.bound.remove(0);
        }
    }
}
