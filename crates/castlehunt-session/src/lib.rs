//! The game session: one treasure hunt in progress.
//!
//! This crate owns the only mutable state in Castlehunt:
//!
//! 1. **Position** — which room the player stands in and how many moves
//!    they have made
//! 2. **Treasures** — where they were hidden at reset, and which are
//!    still waiting to be picked up
//! 3. **Hint** — whether the single hint of this game has been spent
//!
//! There is exactly one [`GameSession`] per process. Whoever owns it (the
//! HTTP router or the console loop) passes it by `&mut` into every
//! operation; the session itself does no locking.
//!
//! # How it fits in the stack
//!
//! ```text
//! Router / Console (above)  ← turns requests into session calls
//!     ↕
//! Session Layer (this crate)  ← rules, state machine, treasure placement
//!     ↕
//! Castle Layer (below)  ← room graph, BFS, hint table
//! ```

mod error;
mod session;
mod snapshot;

pub use error::SessionError;
pub use session::{
    GameSession, GameState, HintOutcome, MoveOutcome, SessionConfig,
    TreasureRoute,
};
pub use snapshot::{RoomSnapshot, Snapshot};
