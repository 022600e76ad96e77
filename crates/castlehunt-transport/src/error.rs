/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection was closed.
    #[error("connection closed: {0}")]
    ConnectionClosed(String),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// Binding or accepting connections failed.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// The read deadline passed with nothing received.
    #[error("timed out before any request bytes arrived")]
    TimedOut,

    /// The peer sent `limit` bytes without finishing a single line.
    #[error("request line exceeds {limit} bytes")]
    RequestTooLarge { limit: usize },
}
