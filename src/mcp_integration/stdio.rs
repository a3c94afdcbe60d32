//! Newline-delimited JSON-RPC transport.
//!
//! Each incoming message is handled on its own task so independent calls
//! interleave. Responses funnel through one channel into a single writer,
//! which keeps frames from interleaving on the output stream.

use super::core::SchemaMcpServer;
use super::protocol::{INTERNAL_ERROR, PARSE_ERROR, error_response};
use crate::auth::TokenProvider;
use crate::dispatcher::SchemaDispatcher;
use crate::error::OperationError;
use log::{debug, error, info, warn};
use serde_json::Value;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

impl<T, D> SchemaMcpServer<T, D>
where
    T: TokenProvider + 'static,
    D: SchemaDispatcher + 'static,
{
    /// Run the MCP server over stdin/stdout until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading stdin or writing stdout fails.
    pub async fn run_stdio(self) -> io::Result<()> {
        info!(
            "{} {} ready for stdio communication",
            self.server_info.name, self.server_info.version
        );
        info!(
            "Available tools: {:?}",
            self.get_tools()
                .iter()
                .filter_map(|t| t.get("name").and_then(Value::as_str).map(str::to_string))
                .collect::<Vec<_>>()
        );

        self.serve(tokio::io::stdin(), tokio::io::stdout())
            .await
            .map(|_| ())
    }

    /// Serve newline-delimited JSON-RPC from `reader` to `writer`.
    ///
    /// Returns the writer once the reader hits EOF and every in-flight
    /// message has been answered.
    pub async fn serve<R, W>(self, reader: R, writer: W) -> io::Result<W>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let server = Arc::new(self);
        let (tx, rx) = mpsc::unbounded_channel::<Value>();
        let writer_task = tokio::spawn(write_responses(rx, writer));
        let mut handlers = JoinSet::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }

            let message: Value = match serde_json::from_slice(line) {
                Ok(message) => message,
                Err(e) => {
                    warn!("Discarding malformed message: {}", e);
                    let _ = tx.send(error_response(
                        Value::Null,
                        PARSE_ERROR,
                        format!("Parse error: {}", e),
                        None,
                    ));
                    continue;
                }
            };

            let server = Arc::clone(&server);
            let tx = tx.clone();
            handlers.spawn(async move {
                let id = message.get("id").cloned();
                let handled =
                    tokio::spawn(async move { server.handle_message(&message).await }).await;

                let response = match handled {
                    Ok(response) => response,
                    Err(e) => {
                        let failure =
                            OperationError::internal(format!("message handler aborted: {}", e));
                        error!("{}", failure);
                        id.map(|id| error_response(id, INTERNAL_ERROR, failure.to_string(), None))
                    }
                };

                if let Some(response) = response {
                    let _ = tx.send(response);
                }
            });
        }

        debug!("Input closed, waiting for {} in-flight message(s)", handlers.len());
        while let Some(joined) = handlers.join_next().await {
            if let Err(e) = joined {
                error!("Message task failed: {}", e);
            }
        }

        drop(tx);
        writer_task.await.map_err(io::Error::other)?
    }
}

async fn write_responses<W>(mut rx: mpsc::UnboundedReceiver<Value>, mut writer: W) -> io::Result<W>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut frame = serde_json::to_vec(&response)?;
        frame.push(b'\n');
        writer.write_all(&frame).await?;
        writer.flush().await?;
    }
    Ok(writer)
}
