use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::RecommendationState;

/// Load the state record, tolerating absence and damage.
///
/// A missing or unparsable file yields the default record; a scheduled run
/// must not die because last week's state got corrupted.
pub fn load_state<P: AsRef<Path>>(path: P) -> RecommendationState {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => RecommendationState::default(),
    }
}

/// Save the state record as pretty JSON.
pub fn save_state<P: AsRef<Path>>(path: P, state: &RecommendationState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
