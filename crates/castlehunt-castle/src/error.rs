//! Error types for the castle layer.
//!
//! Everything here is a configuration error: it can only happen while a
//! castle or a game is being set up, never in the middle of a turn.

/// Errors raised while building a castle or validating a game against it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastleError {
    /// Registering another room would exceed the graph's room limit.
    #[error("castle is full: at most {max} rooms may be registered")]
    CapacityExceeded { max: usize },

    /// A room with this name is already registered.
    #[error("room {0:?} is already registered")]
    DuplicateRoom(String),

    /// A configuration refers to a room that was never registered.
    #[error("room {0:?} is not part of the castle")]
    UnknownRoom(String),

    /// There are not enough rooms (besides the start room) to hide every
    /// treasure in a distinct place.
    #[error("need {needed} rooms besides the start room, castle has {available}")]
    NotEnoughRooms { needed: usize, available: usize },

    /// A scripted treasure placement broke one of the placement rules.
    #[error("invalid treasure layout: {0}")]
    InvalidTreasureLayout(String),
}
