//! Line input feeding the dispatch loop.
//!
//! Reading happens on its own task so the session loop can keep rendering
//! stream events while the user types.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

const LINE_CHANNEL_CAPACITY: usize = 16;

/// Spawn a reader over process stdin.
pub fn spawn_stdin_lines() -> mpsc::Receiver<String> {
    spawn_line_reader(tokio::io::stdin())
}

/// Spawn a task that forwards each line of `reader` (without the newline).
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// ending input. The returned channel closes at end of input, on an I/O
/// error, or when the receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_CHANNEL_CAPACITY);
    tokio::spawn(async move {
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(decode_line(&buf)).await.is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read input line");
                    break;
                }
            }
        }
    });
    rx
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}
