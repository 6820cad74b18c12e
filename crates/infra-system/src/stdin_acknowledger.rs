// Stdin acknowledger

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

use ipb_core::port::Acknowledger;
use ipb_core::Result;

/// Waits for one line on an input stream (stdin in production).
///
/// Terminals deliver input line by line, so "any key" means Enter here.
/// The line is consumed as raw bytes; console code pages other than UTF-8
/// are fine.
pub struct StdinAcknowledger<R = tokio::io::Stdin> {
    input: Mutex<BufReader<R>>,
}

impl StdinAcknowledger {
    pub fn new() -> Self {
        Self::from_reader(tokio::io::stdin())
    }
}

impl Default for StdinAcknowledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncRead + Unpin + Send> StdinAcknowledger<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            input: Mutex::new(BufReader::new(reader)),
        }
    }
}

#[async_trait]
impl<R: AsyncRead + Unpin + Send> Acknowledger for StdinAcknowledger<R> {
    async fn wait_for_acknowledgment(&self) -> Result<()> {
        let mut line = Vec::new();
        let read = self
            .input
            .lock()
            .await
            .read_until(b'\n', &mut line)
            .await?;
        if read == 0 {
            debug!("Input closed; treating as acknowledgment");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_exactly_one_line() {
        let ack = StdinAcknowledger::from_reader(&b"first\nsecond\n"[..]);
        ack.wait_for_acknowledgment().await.unwrap();

        let mut rest = String::new();
        ack.input.lock().await.read_line(&mut rest).await.unwrap();
        assert_eq!(rest, "second\n");
    }

    #[tokio::test]
    async fn test_non_utf8_keypress_is_accepted() {
        // cp1252 'é' from a Windows console
        let ack = StdinAcknowledger::from_reader(&b"\xe9\nnext\n"[..]);
        assert!(ack.wait_for_acknowledgment().await.is_ok());

        let mut rest = String::new();
        ack.input.lock().await.read_line(&mut rest).await.unwrap();
        assert_eq!(rest, "next\n");
    }

    #[tokio::test]
    async fn test_eof_counts_as_acknowledgment() {
        let ack = StdinAcknowledger::from_reader(&b""[..]);
        assert!(ack.wait_for_acknowledgment().await.is_ok());
    }
}
