//! Plain TCP transport: one HTTP request per connection.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Instant;

use crate::{Connection, ConnectionId, Transport, TransportError};

/// Most bytes read from a single request. Anything past this is ignored;
/// only the request line matters.
pub const MAX_REQUEST_BYTES: usize = 4096;

const HEADER_END: &[u8] = b"\r\n\r\n";

/// Counter for generating unique connection IDs.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// A TCP [`Transport`] that listens for incoming connections.
pub struct TcpTransport {
    listener: TcpListener,
    read_timeout: Option<Duration>,
}

impl TcpTransport {
    /// Binds a new TCP listener to the given address. Reads have no
    /// deadline until [`with_read_timeout`](Self::with_read_timeout).
    pub async fn bind(addr: &str) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(TransportError::AcceptFailed)?;
        tracing::info!(addr, "TCP transport listening");
        Ok(Self {
            listener,
            read_timeout: None,
        })
    }

    /// Gives every accepted connection this long to send its request.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Returns the address actually bound (useful after binding port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

impl Transport for TcpTransport {
    type Connection = TcpConnection;
    type Error = TransportError;

    async fn accept(&mut self) -> Result<Self::Connection, Self::Error> {
        let (stream, peer) = self
            .listener
            .accept()
            .await
            .map_err(TransportError::AcceptFailed)?;

        let id = ConnectionId::new(
            NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
        );
        tracing::debug!(%id, %peer, "accepted TCP connection");

        Ok(TcpConnection {
            id,
            peer,
            stream,
            deadline: self.read_timeout.map(|t| Instant::now() + t),
        })
    }
}

/// A single accepted TCP connection.
pub struct TcpConnection {
    id: ConnectionId,
    peer: SocketAddr,
    stream: TcpStream,
    /// When `recv` stops waiting for more bytes.
    deadline: Option<Instant>,
}

impl TcpConnection {
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// One read, bounded by the deadline. `Ok(None)` means the deadline
    /// passed.
    async fn read_chunk(&mut self, chunk: &mut [u8]) -> Result<Option<usize>, TransportError> {
        let read = self.stream.read(chunk);
        let n = match self.deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, read).await {
                Ok(n) => n,
                Err(_) => return Ok(None),
            },
            None => read.await,
        };
        n.map(Some).map_err(TransportError::ReceiveFailed)
    }
}

impl Connection for TcpConnection {
    type Error = TransportError;

    async fn send(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.stream
            .write_all(data)
            .await
            .map_err(TransportError::SendFailed)?;
        self.stream.flush().await.map_err(TransportError::SendFailed)
    }

    /// Reads until the blank line that ends the headers, EOF,
    /// [`MAX_REQUEST_BYTES`], or the read deadline, whichever comes first.
    /// Whatever arrived by then is the request.
    ///
    /// # Errors
    /// - [`TransportError::TimedOut`] if the deadline passed with nothing read.
    /// - [`TransportError::RequestTooLarge`] if the cap is reached before
    ///   the first line break.
    async fn recv(&mut self) -> Result<Option<Vec<u8>>, Self::Error> {
        let mut buf = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];

        loop {
            let Some(n) = self.read_chunk(&mut chunk).await? else {
                if buf.is_empty() {
                    return Err(TransportError::TimedOut);
                }
                tracing::debug!(id = %self.id, bytes = buf.len(), "read deadline hit, using partial request");
                break;
            };
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if contains(&buf, HEADER_END) {
                break;
            }
            if buf.len() >= MAX_REQUEST_BYTES {
                if !buf.contains(&b'\n') {
                    return Err(TransportError::RequestTooLarge {
                        limit: MAX_REQUEST_BYTES,
                    });
                }
                buf.truncate(MAX_REQUEST_BYTES);
                break;
            }
        }

        Ok((!buf.is_empty()).then_some(buf))
    }

    async fn close(&mut self) -> Result<(), Self::Error> {
        self.stream
            .shutdown()
            .await
            .map_err(TransportError::SendFailed)
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
