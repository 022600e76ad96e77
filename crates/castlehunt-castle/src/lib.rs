//! The castle: rooms, the passages between them, and the riddles that
//! point at them.
//!
//! This crate is the static half of Castlehunt. Nothing in here changes
//! once a game is running:
//!
//! - [`RoomGraph`] — an undirected graph of named rooms
//! - [`shortest_path`] — breadth-first search between two rooms
//! - [`hint_for`] — the fixed riddle for each room
//! - [`CastleLayout`] — the declarative room/path list a graph is built from
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Layer (above)  ← moves the player around this graph
//!     ↕
//! Castle Layer (this crate)  ← rooms, adjacency, BFS, hints
//! ```

mod error;
mod graph;
mod hint;
mod layout;
mod path;

pub use error::CastleError;
pub use graph::{MAX_ROOMS, RoomGraph, RoomId};
pub use hint::{FALLBACK_HINT, hint_for};
pub use layout::CastleLayout;
pub use path::shortest_path;
