//! Loading castle layouts from JSON.
//!
//! ```json
//! {
//!   "rooms": ["Gate", "Yard", "Keep"],
//!   "paths": [["Gate", "Yard"], ["Yard", "Keep"]]
//! }
//! ```

use std::path::Path;

use castlehunt_castle::CastleLayout;

use crate::HuntError;

/// Parses a layout from JSON text. The layout is not validated until
/// [`CastleLayout::build`].
pub fn parse_layout(json: &str) -> Result<CastleLayout, HuntError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a layout file.
pub fn load_layout(path: impl AsRef<Path>) -> Result<CastleLayout, HuntError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let layout = parse_layout(&text)?;
    tracing::info!(
        path = %path.display(),
        rooms = layout.rooms.len(),
        paths = layout.paths.len(),
        "loaded castle layout"
    );
    Ok(layout)
}
