//! Line-based console transport
//!
//! Each input line is one chat message from a fixed sender; each reply is
//! written back followed by a newline.

use std::future::Future;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::handler::{CommandHandler, IncomingMessage};

pub struct ConsoleTransport {
    sender_id: i64,
}

impl ConsoleTransport {
    #[must_use]
    pub fn new(sender_id: i64) -> Self {
        Self { sender_id }
    }

    /// Feed lines from `reader` to `handler` until EOF or `shutdown` resolves.
    ///
    /// A shutdown during a run drops the in-flight run; its reply is never written.
    pub async fn run<R, W>(
        &self,
        handler: &CommandHandler,
        reader: R,
        mut writer: W,
        shutdown: impl Future<Output = ()>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tokio::pin!(shutdown);
        let mut lines = reader.lines();

        loop {
            let line = tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!("Shutdown requested, leaving console loop");
                    break;
                }
                line = lines.next_line() => line.context("failed to read input")?,
            };
            let Some(line) = line else {
                tracing::debug!("Input closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let message = IncomingMessage {
                sender_id: self.sender_id,
                text: line,
            };
            let reply = tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::warn!("Shutdown requested, abandoning in-flight command");
                    break;
                }
                reply = handler.handle(&message) => reply,
            };

            if let Some(reply) = reply {
                writer
                    .write_all(reply.as_bytes())
                    .await
                    .context("failed to write reply")?;
                writer.write_all(b"\n").await.context("failed to write reply")?;
                writer.flush().await.context("failed to flush output")?;
            }
        }

        Ok(())
    }
}
