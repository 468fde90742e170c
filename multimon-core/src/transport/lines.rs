use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Newline-delimited reader over any buffered byte stream.
///
/// Bytes are decoded lossily, so a burst of line noise never ends the stream.
/// A trailing `\r` is dropped along with the `\n`.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(256),
        }
    }

    /// Next line, or `None` once the stream is closed.
    ///
    /// A final unterminated fragment is still returned before `None`.
    pub async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();

        let n = self.inner.read_until(b'\n', &mut self.buf).await?;
        if n == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }

        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }
}
