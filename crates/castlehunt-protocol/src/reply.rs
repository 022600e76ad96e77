//! JSON reply bodies, one per route.
//!
//! The full game snapshot (`GET /api/state`) is defined next to the
//! session that produces it; everything else a client can receive is
//! here. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Reply to `GET /api/move`.
///
/// A refused move is still a normal reply: `success` is `false` and
/// `message` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReply {
    pub success: bool,
    pub message: String,
    pub found_treasure: bool,
}

/// Reply to `GET /api/hint`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReply {
    pub hint: String,
    /// Whether this game's hint is spent, after this request.
    pub used: bool,
}

/// Reply to `GET /api/reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetReply {
    pub success: bool,
    pub message: String,
}

impl ResetReply {
    /// The only reset reply there is.
    pub fn done() -> Self {
        Self {
            success: true,
            message: "Game reset".to_string(),
        }
    }
}

/// Reply to `GET /api/path`. Empty when there is no path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReply {
    pub path: Vec<String>,
}

/// Reply to anything that is not a known route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

impl ErrorReply {
    pub fn unknown_endpoint() -> Self {
        Self {
            error: "Unknown endpoint".to_string(),
        }
    }
}
