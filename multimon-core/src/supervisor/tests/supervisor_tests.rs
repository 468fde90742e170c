use crate::record::Level;
use crate::session::{DeviceSession, INITIAL_CLOCK, INITIAL_STATUS, UNKNOWN_HARDWARE_ID};
use crate::sink::{CollectingSink, EventSink};
use crate::supervisor::{Shutdown, TransportRegistry, route_lines, supervise};
use crate::transport::{LineReader, TransportEntry};
use pretty_assertions::assert_eq;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader, duplex};
use tokio::sync::oneshot;

//-----------------------------------------------------------------------------
// Test helpers
//-----------------------------------------------------------------------------

fn entry(device_id: u32) -> TransportEntry {
    TransportEntry {
        device_id,
        path: PathBuf::from(format!("/dev/ttyUSB{device_id}")),
    }
}

fn row(level: Level, clock: &str, status: &str, hardware_id: &str) -> (Level, String, String, String) {
    (
        level,
        clock.to_string(),
        status.to_string(),
        hardware_id.to_string(),
    )
}

struct FailingSink;

impl EventSink for FailingSink {
    fn emit(&self, _event: &crate::session::DeviceEvent) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}

//-----------------------------------------------------------------------------
// Routing
//-----------------------------------------------------------------------------

#[tokio::test]
async fn route_lines_processes_in_arrival_order() {
    let input: &[u8] = b"rst:0x1 (POWERON_RESET)\r\n\
        I (120) snail.c: Status change: OFFLINE => ONLINE, v: 0\x1B\r\n\
        I (121) snail.c: Status change: ONLINE => ERROR, v: 1\x1B\r\n\
        D (200) nanr.c: own_ndi: AA:BB:CC:11:22:33\x1B\r\n";

    let sink = CollectingSink::new();
    let mut session = DeviceSession::new(5);
    let mut lines = LineReader::new(input);

    let count = route_lines(&mut session, &mut lines, &sink).await.unwrap();

    assert_eq!(count, 4);

    let summary: Vec<_> = sink
        .events()
        .into_iter()
        .map(|e| (e.level, e.clock, e.status, e.hardware_id))
        .collect();

    assert_eq!(
        summary,
        vec![
            row(Level::None, INITIAL_CLOCK, INITIAL_STATUS, UNKNOWN_HARDWARE_ID),
            row(Level::Info, "120", "ONLINE", UNKNOWN_HARDWARE_ID),
            row(Level::Info, "121", "ONLINE", UNKNOWN_HARDWARE_ID),
            row(Level::Debug, "200", "ONLINE", "AA:BB:CC:11:22:33"),
        ]
    );
    assert_eq!(session.clock(), "200");
}

#[tokio::test]
async fn route_lines_survives_failing_sink() {
    let input: &[u8] = b"I (7) snail.c: Status change: OFFLINE => ONLINE, v: 0\x1B\nplain\n";
    let mut session = DeviceSession::new(1);
    let mut lines = LineReader::new(input);

    let count = route_lines(&mut session, &mut lines, &FailingSink).await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(session.status(), "ONLINE");
    assert_eq!(session.clock(), "7");
}

//-----------------------------------------------------------------------------
// Supervision
//-----------------------------------------------------------------------------

#[tokio::test]
async fn interleaved_devices_stay_isolated() {
    let sink = Arc::new(CollectingSink::new());
    let mut registry = TransportRegistry::new();

    let (mut tx1, rx1) = duplex(1024);
    let (mut tx2, rx2) = duplex(1024);

    registry.bind(entry(1), BufReader::new(rx1), DeviceSession::new(1), sink.clone());
    registry.bind(entry(2), BufReader::new(rx2), DeviceSession::new(2), sink.clone());
    assert_eq!(registry.len(), 2);

    tx1.write_all(b"I (10) snail.c: Status change: OFFLINE => ONLINE, v: 0\x1B\n")
        .await
        .unwrap();
    tx2.write_all(b"D (500) nanr.c: own_ndi: 11:22:33:44:55:66\x1B\n")
        .await
        .unwrap();
    tx1.write_all(b"I (11) main.c: tick\x1B\n").await.unwrap();
    tx2.write_all(b"W (501) main.c: tock\x1B\n").await.unwrap();
    drop(tx1);
    drop(tx2);

    let outcome = supervise(&mut registry, std::future::pending()).await;
    assert_eq!(outcome, Shutdown::Drained);

    let one: Vec<_> = sink
        .events_for(1)
        .into_iter()
        .map(|e| (e.clock, e.status, e.hardware_id))
        .collect();
    let two: Vec<_> = sink
        .events_for(2)
        .into_iter()
        .map(|e| (e.clock, e.status, e.hardware_id))
        .collect();

    assert_eq!(
        one,
        vec![
            ("10".to_string(), "ONLINE".to_string(), UNKNOWN_HARDWARE_ID.to_string()),
            ("11".to_string(), "ONLINE".to_string(), UNKNOWN_HARDWARE_ID.to_string()),
        ]
    );
    assert_eq!(
        two,
        vec![
            ("500".to_string(), INITIAL_STATUS.to_string(), "11:22:33:44:55:66".to_string()),
            ("501".to_string(), INITIAL_STATUS.to_string(), "11:22:33:44:55:66".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_registry_drains_immediately() {
    let mut registry = TransportRegistry::new();

    let outcome = supervise(&mut registry, std::future::pending()).await;

    assert_eq!(outcome, Shutdown::Drained);
}

#[tokio::test]
async fn interrupt_closes_every_transport() {
    let sink = Arc::new(CollectingSink::new());
    let mut registry = TransportRegistry::new();

    let (mut tx1, rx1) = duplex(64);
    let (_tx2, rx2) = duplex(64);

    registry.bind(entry(1), BufReader::new(rx1), DeviceSession::new(1), sink.clone());
    registry.bind(entry(2), BufReader::new(rx2), DeviceSession::new(2), sink.clone());

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    stop_tx.send(()).unwrap();

    let outcome = supervise(&mut registry, async {
        let _ = stop_rx.await;
    })
    .await;

    assert_eq!(outcome, Shutdown::Interrupted);
    assert!(registry.is_empty());

    // Once the aborted task drops its end, writes start failing.
    let closed = tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            if tx1.write_all(b"I (1) main.c: late\x1B\n").await.is_err() {
                break;
            }
            tokio::task::yield_now().await;
        }
    })
    .await;

    assert!(closed.is_ok());
}
