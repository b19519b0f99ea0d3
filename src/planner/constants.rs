use std::collections::HashSet;

/// Score bonus when at least one protein-group ingredient is on hand.
pub const PROTEIN_BONUS: i32 = 10;

/// Score bonus when at least one vegetable-group ingredient is on hand.
pub const VEG_BONUS: i32 = 10;

/// Soft de-prioritization for dishes led by pork. Never an exclusion: a
/// pork dish still wins when it is the best or only viable candidate.
pub const PORK_PENALTY: i32 = 3;

/// Ingredient identifier whose lead position triggers the pork penalty.
pub const PORK: &str = "cerdo";

/// Cap on alternative plans (B and C) offered alongside the best plan.
pub const MAX_ALTERNATIVES: usize = 2;

/// Pantry staples always offered on the page's ingredient checklist.
pub const STAPLE_INGREDIENTS: &[&str] = &[
    "sal",
    "aceite",
    "limon",
    "tomate",
    "cebolla",
    "zanahoria",
    "lechuga",
    "morrón",
    "zapallito",
    "pepino",
];

/// Ingredients assumed on hand when the scheduled build picks its plan.
pub const DEFAULT_PANTRY: &[&str] = &[
    "sal", "aceite", "limon", "tomate", "cebolla", "zanahoria", "lechuga",
];

/// The default pantry as an owned set, ready for scoring.
pub fn default_pantry() -> HashSet<String> {
    DEFAULT_PANTRY.iter().map(|s| s.to_string()).collect()
}
