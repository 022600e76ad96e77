//! Error types for the protocol layer.
//!
//! Each crate in Castlehunt defines its own error enum. When you see a
//! `ProtocolError`, the problem is in the shape of a request or in
//! serialization, not in networking or game rules.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The first line of the request is blank.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Serialization failed (turning a reply into bytes).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a reply).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
