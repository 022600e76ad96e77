//! Castle layout: the declarative list of rooms and passages a
//! [`RoomGraph`] is built from.

use serde::{Deserialize, Serialize};

use crate::{CastleError, RoomGraph};

// ---------------------------------------------------------------------------
// Reference castle
// ---------------------------------------------------------------------------

const REFERENCE_ROOMS: [&str; 10] = [
    "Entrance",
    "Hall",
    "Armory",
    "TreasureRoom",
    "Library",
    "Kitchen",
    "Dungeon",
    "Observatory",
    "Garden",
    "Balcony",
];

const REFERENCE_PATHS: [(&str, &str); 14] = [
    ("Entrance", "Hall"),
    ("Entrance", "Library"),
    ("Hall", "Armory"),
    ("Hall", "Library"),
    ("Hall", "Dungeon"),
    ("Library", "Kitchen"),
    ("Library", "Armory"),
    ("Library", "Observatory"),
    ("Armory", "TreasureRoom"),
    ("Kitchen", "TreasureRoom"),
    ("Kitchen", "Dungeon"),
    ("Kitchen", "Garden"),
    ("Observatory", "Balcony"),
    ("Garden", "Balcony"),
];

// ---------------------------------------------------------------------------
// CastleLayout
// ---------------------------------------------------------------------------

/// Rooms (in registration order) and the passages joining them.
///
/// `CastleLayout::default()` is the ten-room reference castle. Custom
/// castles can be assembled with [`room`](Self::room) and
/// [`path`](Self::path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleLayout {
    /// Room names. Registration order decides room ids.
    pub rooms: Vec<String>,

    /// Undirected passages as pairs of room names.
    pub paths: Vec<(String, String)>,
}

impl CastleLayout {
    /// An empty layout.
    pub fn empty() -> Self {
        Self {
            rooms: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Appends a room.
    pub fn room(mut self, name: impl Into<String>) -> Self {
        self.rooms.push(name.into());
        self
    }

    /// Appends a passage.
    pub fn path(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.paths.push((a.into(), b.into()));
        self
    }

    /// Builds the room graph.
    ///
    /// Passages naming unregistered rooms are skipped.
    ///
    /// # Errors
    /// Any [`CastleError`] raised by [`RoomGraph::add_room`].
    pub fn build(&self) -> Result<RoomGraph, CastleError> {
        let mut graph = RoomGraph::new();
        for name in &self.rooms {
            graph.add_room(name.as_str())?;
        }
        for (a, b) in &self.paths {
            graph.add_path(a, b);
        }
        tracing::info!(
            rooms = graph.len(),
            paths = self.paths.len(),
            "castle initialized"
        );
        Ok(graph)
    }
}

impl Default for CastleLayout {
    fn default() -> Self {
        Self {
            rooms: REFERENCE_ROOMS.iter().map(|r| r.to_string()).collect(),
            paths: REFERENCE_PATHS
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }
}
