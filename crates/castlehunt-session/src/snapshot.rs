//! Read-only projection of a [`GameSession`].
//!
//! This is the shape clients poll to draw the castle. Field names are
//! camelCase on the wire (`currentRoom`, `treasureLocations`, ...).

use serde::{Deserialize, Serialize};

use crate::GameSession;

/// The whole game at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub current_room: String,
    pub treasures_found: usize,
    pub moves: u32,
    pub max_moves: u32,
    pub hint_used: bool,
    /// All treasures found, or all moves spent.
    pub game_over: bool,
    /// All treasures found within the move budget.
    pub won: bool,
    /// Rooms that held a treasure at the last reset, collected or not.
    pub treasure_locations: Vec<String>,
    /// Every room in registration order.
    pub rooms: Vec<RoomSnapshot>,
}

/// One room as seen in a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub name: String,
    /// Still holds an uncollected treasure.
    pub has_treasure: bool,
    /// Neighbors in registration order.
    pub adjacent: Vec<String>,
}

impl Snapshot {
    /// Captures the current state of `session`.
    pub fn capture(session: &GameSession) -> Self {
        let graph = session.graph();
        let rooms = graph
            .names()
            .map(|name| RoomSnapshot {
                name: name.to_string(),
                has_treasure: session.has_treasure(name),
                adjacent: graph
                    .neighbors(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect();

        Self {
            current_room: session.current_room().to_string(),
            treasures_found: session.treasures_found(),
            moves: session.moves(),
            max_moves: session.max_moves(),
            hint_used: session.hint_used(),
            game_over: session.is_game_over(),
            won: session.is_won(),
            treasure_locations: session
                .treasure_locations()
                .into_iter()
                .map(str::to_string)
                .collect(),
            rooms,
        }
    }

    /// Looks up one room by name.
    pub fn room(&self, name: &str) -> Option<&RoomSnapshot> {
        self.rooms.iter().find(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use castlehunt_castle::CastleLayout;

    use super::*;
    use crate::SessionConfig;

    fn scripted(rooms: &[&str]) -> GameSession {
        let graph = CastleLayout::default().build().unwrap();
        let mut s =
            GameSession::with_seed(graph, SessionConfig::default(), 3).unwrap();
        s.reset_with_treasures(rooms).unwrap();
        s
    }

    #[test]
    fn test_capture_fresh_game() {
        let s = scripted(&["Hall", "Kitchen", "Balcony"]);

        let snap = s.snapshot();

        assert_eq!(snap.current_room, "Entrance");
        assert_eq!(snap.moves, 0);
        assert_eq!(snap.max_moves, 8);
        assert!(!snap.game_over);
        assert!(!snap.won);
        assert_eq!(snap.treasure_locations, vec!["Hall", "Kitchen", "Balcony"]);
        assert_eq!(snap.rooms.len(), 10);
        assert_eq!(snap.rooms[0].name, "Entrance");
        assert_eq!(snap.rooms[0].adjacent, vec!["Hall", "Library"]);
        assert!(snap.room("Kitchen").unwrap().has_treasure);
        assert!(!snap.room("Library").unwrap().has_treasure);
    }

    #[test]
    fn test_capture_after_collection_keeps_original_locations() {
        let mut s = scripted(&["Hall", "Kitchen", "Balcony"]);
        s.move_to("Hall").unwrap();

        let snap = s.snapshot();

        assert_eq!(snap.treasure_locations, vec!["Hall", "Kitchen", "Balcony"]);
        assert!(!snap.room("Hall").unwrap().has_treasure);
        assert_eq!(snap.treasures_found, 1);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let s = scripted(&["Hall", "Kitchen", "Balcony"]);

        let json = serde_json::to_value(s.snapshot()).unwrap();

        assert_eq!(json["currentRoom"], "Entrance");
        assert_eq!(json["maxMoves"], 8);
        assert_eq!(json["hintUsed"], false);
        assert_eq!(json["gameOver"], false);
        assert_eq!(json["treasureLocations"][1], "Kitchen");
        assert_eq!(json["rooms"][1]["hasTreasure"], true);
        assert_eq!(json["rooms"][1]["adjacent"][0], "Entrance");
    }
}
