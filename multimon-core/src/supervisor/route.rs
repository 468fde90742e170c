use crate::session::DeviceSession;
use crate::sink::EventSink;
use crate::transport::LineReader;
use tokio::io::AsyncBufRead;

/// Feed every line of `lines` through `session` into `sink`, in arrival order.
///
/// Returns the number of lines processed once the transport reaches end of
/// stream. Sink failures are logged and otherwise ignored.
pub async fn route_lines<R>(
    session: &mut DeviceSession,
    lines: &mut LineReader<R>,
    sink: &dyn EventSink,
) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
{
    let mut count = 0;

    while let Some(line) = lines.next_line().await? {
        let event = session.process_line(&line);
        count += 1;

        if let Err(e) = sink.emit(&event) {
            tracing::debug!(device = session.device_id(), error = %e, "sink rejected event");
        }
    }

    Ok(count)
}
