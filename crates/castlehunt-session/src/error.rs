//! Error types for the session layer.

/// A move or hint request that the rules of the game refuse.
///
/// None of these are failures of the program: the session is left
/// untouched and the caller reports the message to the player. The
/// `Display` text is what the player reads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Every treasure has been found; only a reset starts a new game.
    #[error("Game already won")]
    AlreadyWon,

    /// The move budget is spent.
    #[error("Out of moves")]
    OutOfMoves,

    /// The requested room is not part of the castle.
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// The requested room is not one step away from the current room.
    #[error("Rooms are not connected: {from} -> {to}")]
    NotConnected { from: String, to: String },

    /// The one hint of this game was already given.
    #[error("Out of hints! You've already used your one hint for this quest.")]
    HintExhausted,
}
