//! The room graph: named rooms and the undirected passages between them.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::Index;

use crate::CastleError;

/// Default upper bound on the number of rooms in a castle.
pub const MAX_ROOMS: usize = 20;

/// Stable index of a room, assigned in registration order.
///
/// The first room registered is `RoomId(0)`, the next `RoomId(1)`, and so
/// on. Ordering by `RoomId` is therefore the same as ordering by
/// registration, which is what BFS tie-breaking relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Returns the underlying index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

/// An undirected graph of named rooms.
///
/// Invariants:
/// - every passage is symmetric: if `a` lists `b`, `b` lists `a`
/// - room names are unique
/// - at most `max_rooms` rooms are ever registered
#[derive(Debug, Clone)]
pub struct RoomGraph {
    names: Vec<String>,
    index: HashMap<String, RoomId>,
    /// Neighbor sets, one per room. `BTreeSet` iterates in ascending
    /// `RoomId` order, i.e. registration order.
    adjacency: Vec<BTreeSet<RoomId>>,
    max_rooms: usize,
}

impl RoomGraph {
    /// Creates an empty graph that accepts up to [`MAX_ROOMS`] rooms.
    pub fn new() -> Self {
        Self::with_max_rooms(MAX_ROOMS)
    }

    /// Creates an empty graph with a custom room limit.
    pub fn with_max_rooms(max_rooms: usize) -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            max_rooms,
        }
    }

    /// Registers a new room with no passages.
    ///
    /// # Errors
    /// - [`CastleError::CapacityExceeded`] if the graph is already full
    /// - [`CastleError::DuplicateRoom`] if the name is already taken
    pub fn add_room(
        &mut self,
        name: impl Into<String>,
    ) -> Result<RoomId, CastleError> {
        let name = name.into();
        if self.names.len() >= self.max_rooms {
            return Err(CastleError::CapacityExceeded {
                max: self.max_rooms,
            });
        }
        if self.index.contains_key(&name) {
            return Err(CastleError::DuplicateRoom(name));
        }

        let id = RoomId(self.names.len());
        self.index.insert(name.clone(), id);
        self.names.push(name);
        self.adjacency.push(BTreeSet::new());
        Ok(id)
    }

    /// Adds a symmetric passage between two named rooms.
    ///
    /// Unknown names are ignored. Returns `true` if both rooms exist and
    /// the passage is now present.
    pub fn add_path(&mut self, a: &str, b: &str) -> bool {
        let (Some(i), Some(j)) = (self.room_id(a), self.room_id(b)) else {
            tracing::debug!(a, b, "ignoring passage to unregistered room");
            return false;
        };
        self.adjacency[i.0].insert(j);
        self.adjacency[j.0].insert(i);
        true
    }

    /// Resolves a room name to its id.
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    /// Returns the name of a room, or `None` for an id from another graph.
    pub fn name(&self, id: RoomId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Names of the rooms one move away from `name`, in registration order.
    ///
    /// Empty for an unknown room.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        match self.room_id(name) {
            Some(id) => self
                .neighbor_ids(id)
                .map(|n| &self[n])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ids of the rooms one move away from `id`, ascending.
    pub fn neighbor_ids(&self, id: RoomId) -> impl Iterator<Item = RoomId> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Returns `true` if a passage joins the two rooms.
    pub fn are_connected(&self, a: RoomId, b: RoomId) -> bool {
        self.adjacency
            .get(a.0)
            .is_some_and(|set| set.contains(&b))
    }

    /// All room ids in registration order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.names.len()).map(RoomId)
    }

    /// All room names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Every room with its neighbors, in registration order.
    ///
    /// This is the "map" a player sees before the hunt starts.
    pub fn describe(&self) -> Vec<(&str, Vec<&str>)> {
        self.names()
            .map(|name| (name, self.neighbors(name)))
            .collect()
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no room is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The room limit this graph was created with.
    pub fn max_rooms(&self) -> usize {
        self.max_rooms
    }
}

impl Default for RoomGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// `graph[id]` is the room's name. Panics for an id from another graph,
/// like slice indexing.
impl Index<RoomId> for RoomGraph {
    type Output = str;

    fn index(&self, id: RoomId) -> &str {
        &self.names[id.0]
    }
}
