use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

/// Sending half of a dedicated output thread.
///
/// Routing tasks run on the async runtime; handing rendered lines to a plain
/// thread keeps a slow terminal or a full pipe from stalling them.
#[derive(Clone)]
pub struct LineWriter {
    tx: mpsc::Sender<String>,
}

/// Owner of the output thread. Joining waits until every queued line is written.
pub struct WriterHandle {
    thread: thread::JoinHandle<io::Result<()>>,
}

impl LineWriter {
    pub fn spawn<W>(mut out: W) -> (Self, WriterHandle)
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<String>();

        let thread = thread::spawn(move || {
            // Ends once every sender is dropped, or on the first failed write.
            for line in rx {
                writeln!(out, "{line}")?;
                out.flush()?;
            }
            Ok(())
        });

        (Self { tx }, WriterHandle { thread })
    }

    pub fn stdout() -> (Self, WriterHandle) {
        Self::spawn(io::stdout())
    }

    pub fn send(&self, line: String) -> io::Result<()> {
        self.tx
            .send(line)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "output writer stopped"))
    }
}

impl WriterHandle {
    /// Block until the thread exits. Only returns once all senders are gone
    /// or a write has failed.
    pub fn join(self) -> io::Result<()> {
        self.thread
            .join()
            .map_err(|_| io::Error::other("output writer panicked"))?
    }

    /// [`WriterHandle::join`] without blocking a runtime worker.
    pub async fn finish(self) -> io::Result<()> {
        tokio::task::spawn_blocking(move || self.join())
            .await
            .map_err(io::Error::other)?
    }
}
