//! The hint table: one riddle per known room.

/// Riddle returned for any room the table does not know.
pub const FALLBACK_HINT: &str = "Somewhere hidden in the unknown halls...";

/// Returns the riddle that points at `room`.
///
/// Pure lookup; never fails. Rooms outside the reference castle get
/// [`FALLBACK_HINT`].
pub fn hint_for(room: &str) -> &'static str {
    match room {
        "Armory" => "The treasure lies where weapons rest in silence.",
        "TreasureRoom" => "The treasure lies where riches are locked away.",
        "Dungeon" => "The treasure lies deep underground, cold and dark.",
        "Library" => {
            "The treasure lies where knowledge rests and dust gathers."
        }
        "Kitchen" => "The treasure lies where food fills the air with warmth.",
        "Garden" => "The treasure lies where flowers bloom and secrets grow.",
        "Observatory" => "The treasure lies where stars are watched at night.",
        "Hall" => "The treasure lies where footsteps echo endlessly.",
        "Balcony" => "The treasure lies where winds whisper tales.",
        _ => FALLBACK_HINT,
    }
}
