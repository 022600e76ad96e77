//! Codec trait and implementations for serializing/deserializing replies.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The router doesn't care HOW a reply is serialized, it only needs
//! something that implements [`Codec`]. Browsers expect JSON, so
//! [`JsonCodec`] is the one the server uses.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// `decode` is used by clients and tests reading replies back; the
/// server itself only encodes.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use castlehunt_protocol::{Codec, JsonCodec, MoveReply};
///
/// let codec = JsonCodec;
/// let reply = MoveReply {
///     success: true,
///     message: "Moved to Hall".into(),
///     found_treasure: false,
/// };
///
/// let bytes = codec.encode(&reply).unwrap();
/// assert!(std::str::from_utf8(&bytes).unwrap().contains("\"foundTreasure\":false"));
///
/// let decoded: MoveReply = codec.decode(&bytes).unwrap();
/// assert_eq!(reply, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
