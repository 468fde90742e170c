use crate::transport::discover::TransportEntry;
use crate::transport::error::TransportError;
use tokio::io::BufReader;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

/// Open a serial transport, 8N1 at `baud_rate`, buffered for line reads.
pub fn open_serial(
    entry: &TransportEntry,
    baud_rate: u32,
) -> Result<BufReader<SerialStream>, TransportError> {
    let path = entry.path.to_string_lossy();

    let port = tokio_serial::new(path, baud_rate)
        .open_native_async()
        .map_err(|e| TransportError::Open {
            path: entry.path.clone(),
            baud_rate,
            source: e,
        })?;

    Ok(BufReader::new(port))
}
