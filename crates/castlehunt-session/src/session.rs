//! The game session state machine.
//!
//! ```text
//!            move (treasure #total)
//!   Active ─────────────────────────→ Won
//!     │
//!     └──── move (#max_moves, treasures left) ──→ Lost
//!
//!   reset() from any state ──→ Active
//! ```
//!
//! `Won` and `Lost` are terminal: every further move is refused until
//! the next reset.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use castlehunt_castle::{
    CastleError, RoomGraph, RoomId, hint_for, shortest_path,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{SessionError, Snapshot};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Rules of a game: where it starts, how long it lasts, how much is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Room the player starts in. Never holds a treasure.
    pub start_room: String,

    /// Move budget per game.
    pub max_moves: u32,

    /// Treasures hidden at every reset, each in a distinct room.
    pub total_treasures: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_room: "Entrance".to_string(),
            max_moves: 8,
            total_treasures: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Treasures left and moves left.
    Active,
    /// Every treasure found.
    Won,
    /// Moves exhausted with treasures left.
    Lost,
}

impl GameState {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player walked into an empty room.
    Moved { room: String },
    /// The player walked into a room and picked up its treasure.
    TreasureFound { room: String },
}

impl MoveOutcome {
    /// The room the player now stands in.
    pub fn room(&self) -> &str {
        match self {
            Self::Moved { room } | Self::TreasureFound { room } => room,
        }
    }

    /// Returns `true` if this move picked up a treasure.
    pub fn found_treasure(&self) -> bool {
        matches!(self, Self::TreasureFound { .. })
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { room } => write!(f, "Moved to {room}"),
            Self::TreasureFound { room } => {
                write!(f, "Found treasure in {room}")
            }
        }
    }
}

/// Result of a hint request that did not break the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// A riddle pointing at a room that still holds a treasure.
    /// The hint is now spent.
    Clue(&'static str),
    /// Nothing left to point at. The hint is *not* spent.
    NoTreasuresRemain,
}

impl HintOutcome {
    /// The text shown to the player.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Clue(text) => text,
            Self::NoTreasuresRemain => "No treasures remain to find!",
        }
    }
}

/// The shortest walk from the start room to one original treasure room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureRoute {
    pub room: String,
    pub path: Vec<String>,
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// The single game in progress.
///
/// Owns the castle graph so that nothing outside the session can change
/// the map under a running game.
#[derive(Debug)]
pub struct GameSession {
    graph: RoomGraph,
    config: SessionConfig,
    start: RoomId,
    current: RoomId,
    moves: u32,
    treasures_found: usize,
    /// Per room: still holds an uncollected treasure.
    treasure: Vec<bool>,
    /// Per room: held a treasure at the last reset. Never cleared by a move.
    original: Vec<bool>,
    hint_used: bool,
    rng: StdRng,
}

impl GameSession {
    /// Creates a session seeded from the system clock and performs the
    /// initial reset.
    ///
    /// # Errors
    /// See [`with_seed`](Self::with_seed).
    pub fn new(
        graph: RoomGraph,
        config: SessionConfig,
    ) -> Result<Self, CastleError> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(graph, config, seed)
    }

    /// Creates a session with a fixed RNG seed and performs the initial
    /// reset. The same seed, graph and config always hide the treasures
    /// in the same rooms.
    ///
    /// # Errors
    /// - [`CastleError::UnknownRoom`] if the start room is not in the graph
    /// - [`CastleError::NotEnoughRooms`] if there are fewer non-start rooms
    ///   than treasures
    pub fn with_seed(
        graph: RoomGraph,
        config: SessionConfig,
        seed: u64,
    ) -> Result<Self, CastleError> {
        let start = graph
            .room_id(&config.start_room)
            .ok_or_else(|| CastleError::UnknownRoom(config.start_room.clone()))?;

        let available = graph.len() - 1;
        if available < config.total_treasures {
            return Err(CastleError::NotEnoughRooms {
                needed: config.total_treasures,
                available,
            });
        }

        let rooms = graph.len();
        let mut session = Self {
            graph,
            config,
            start,
            current: start,
            moves: 0,
            treasures_found: 0,
            treasure: vec![false; rooms],
            original: vec![false; rooms],
            hint_used: false,
            rng: StdRng::seed_from_u64(seed),
        };
        session.reset();
        Ok(session)
    }

    // -- Operations -------------------------------------------------------

    /// Moves the player to an adjacent room.
    ///
    /// Checks run in a fixed order: already won, out of moves, unknown
    /// room, not adjacent. A refused move changes nothing.
    ///
    /// # Errors
    /// [`SessionError::AlreadyWon`], [`SessionError::OutOfMoves`],
    /// [`SessionError::RoomNotFound`] or [`SessionError::NotConnected`].
    pub fn move_to(&mut self, target: &str) -> Result<MoveOutcome, SessionError> {
        if self.treasures_found >= self.config.total_treasures {
            return Err(SessionError::AlreadyWon);
        }
        if self.moves >= self.config.max_moves {
            return Err(SessionError::OutOfMoves);
        }

        let to = self
            .graph
            .room_id(target)
            .ok_or_else(|| SessionError::RoomNotFound(target.to_string()))?;

        if !self.graph.are_connected(self.current, to) {
            return Err(SessionError::NotConnected {
                from: self.current_room().to_string(),
                to: target.to_string(),
            });
        }

        self.current = to;
        self.moves += 1;
        let room = target.to_string();

        let outcome = if self.treasure[to.0] {
            self.treasure[to.0] = false;
            self.treasures_found += 1;
            tracing::info!(
                %room,
                found = self.treasures_found,
                total = self.config.total_treasures,
                "treasure found"
            );
            MoveOutcome::TreasureFound { room }
        } else {
            tracing::debug!(%room, moves = self.moves, "player moved");
            MoveOutcome::Moved { room }
        };

        match self.state() {
            GameState::Won => {
                tracing::info!(moves = self.moves, "all treasures found, game won");
            }
            GameState::Lost => {
                tracing::info!(
                    found = self.treasures_found,
                    "out of moves, game lost"
                );
            }
            GameState::Active => {}
        }

        Ok(outcome)
    }

    /// Spends the game's single hint on the first room (in registration
    /// order) that still holds a treasure.
    ///
    /// # Errors
    /// [`SessionError::HintExhausted`] if the hint was already spent.
    pub fn hint(&mut self) -> Result<HintOutcome, SessionError> {
        if self.hint_used {
            return Err(SessionError::HintExhausted);
        }

        let Some(room) = self.graph.room_ids().find(|id| self.treasure[id.0])
        else {
            return Ok(HintOutcome::NoTreasuresRemain);
        };

        self.hint_used = true;
        tracing::debug!(room = %&self.graph[room], "hint given");
        Ok(HintOutcome::Clue(hint_for(&self.graph[room])))
    }

    /// Starts a new game: back to the start room, counters cleared, and
    /// `total_treasures` treasures hidden in distinct random rooms other
    /// than the start room.
    pub fn reset(&mut self) {
        self.clear();

        let rooms = self.graph.len();
        let mut placed = 0;
        // Terminates: construction checked there are enough candidates.
        while placed < self.config.total_treasures {
            let r = self.rng.random_range(0..rooms);
            if r != self.start.0 && !self.treasure[r] {
                self.treasure[r] = true;
                self.original[r] = true;
                placed += 1;
                tracing::debug!(room = %&self.graph[RoomId(r)], "treasure placed");
            }
        }

        tracing::info!(
            treasures = self.config.total_treasures,
            max_moves = self.config.max_moves,
            "game reset"
        );
    }

    /// Starts a new game with the treasures in the given rooms.
    ///
    /// # Errors
    /// - [`CastleError::UnknownRoom`] for a name not in the castle
    /// - [`CastleError::InvalidTreasureLayout`] if the count is not
    ///   `total_treasures`, a room repeats, or the start room is listed
    ///
    /// On error the current game is left as it was.
    pub fn reset_with_treasures(&mut self, rooms: &[&str]) -> Result<(), CastleError> {
        if rooms.len() != self.config.total_treasures {
            return Err(CastleError::InvalidTreasureLayout(format!(
                "expected {} treasure rooms, got {}",
                self.config.total_treasures,
                rooms.len()
            )));
        }

        let mut ids = Vec::with_capacity(rooms.len());
        for name in rooms {
            let id = self
                .graph
                .room_id(name)
                .ok_or_else(|| CastleError::UnknownRoom(name.to_string()))?;
            if id == self.start {
                return Err(CastleError::InvalidTreasureLayout(format!(
                    "{name} is the start room"
                )));
            }
            if ids.contains(&id) {
                return Err(CastleError::InvalidTreasureLayout(format!(
                    "{name} is listed twice"
                )));
            }
            ids.push(id);
        }

        self.clear();
        for id in ids {
            self.treasure[id.0] = true;
            self.original[id.0] = true;
        }
        tracing::info!(?rooms, "game reset with scripted treasures");
        Ok(())
    }

    /// Read-only projection of the whole game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    fn clear(&mut self) {
        self.current = self.start;
        self.moves = 0;
        self.treasures_found = 0;
        self.hint_used = false;
        self.treasure.fill(false);
        self.original.fill(false);
    }

    // -- Queries ----------------------------------------------------------

    /// Current position in the state machine.
    pub fn state(&self) -> GameState {
        if self.treasures_found >= self.config.total_treasures {
            GameState::Won
        } else if self.moves >= self.config.max_moves {
            GameState::Lost
        } else {
            GameState::Active
        }
    }

    /// Treasures all found or moves all spent.
    pub fn is_game_over(&self) -> bool {
        self.state().is_terminal()
    }

    /// Treasures all found within the move budget.
    pub fn is_won(&self) -> bool {
        self.treasures_found >= self.config.total_treasures
            && self.moves <= self.config.max_moves
    }

    /// Name of the room the player stands in.
    pub fn current_room(&self) -> &str {
        &self.graph[self.current]
    }

    /// Rooms one move away from the player, in registration order.
    pub fn adjacent_rooms(&self) -> Vec<&str> {
        self.graph.neighbors(self.current_room())
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_moves(&self) -> u32 {
        self.config.max_moves
    }

    /// Moves left before the game is lost.
    pub fn moves_left(&self) -> u32 {
        self.config.max_moves.saturating_sub(self.moves)
    }

    pub fn treasures_found(&self) -> usize {
        self.treasures_found
    }

    pub fn total_treasures(&self) -> usize {
        self.config.total_treasures
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Returns `true` if the room still holds an uncollected treasure.
    /// `false` for unknown rooms.
    pub fn has_treasure(&self, room: &str) -> bool {
        self.graph
            .room_id(room)
            .is_some_and(|id| self.treasure[id.0])
    }

    /// Rooms that held a treasure at the last reset, in registration
    /// order. Collecting a treasure does not remove its room from this list.
    pub fn treasure_locations(&self) -> Vec<&str> {
        self.graph
            .room_ids()
            .filter(|id| self.original[id.0])
            .map(|id| &self.graph[id])
            .collect()
    }

    /// Shortest walk from the start room to every original treasure room.
    pub fn treasure_routes(&self) -> Vec<TreasureRoute> {
        let start = &self.graph[self.start];
        self.treasure_locations()
            .into_iter()
            .map(|room| TreasureRoute {
                room: room.to_string(),
                path: shortest_path(&self.graph, start, room)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    /// The castle this game is played in.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
