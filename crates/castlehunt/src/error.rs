//! Unified error type for Castlehunt.

use castlehunt_castle::CastleError;
use castlehunt_protocol::ProtocolError;
use castlehunt_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates `From` impls, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum HuntError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (malformed request, encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The castle or the game rules are misconfigured.
    #[error(transparent)]
    Castle(#[from] CastleError),

    /// A layout file could not be parsed.
    #[error("invalid castle layout: {0}")]
    Layout(#[from] serde_json::Error),

    /// Console or layout file I/O failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
