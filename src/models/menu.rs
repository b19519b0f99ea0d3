use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single dish on the weekly menu.
///
/// The three ingredient groups may be empty; a JSON entry that omits a group
/// entirely deserializes with that group empty rather than being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuOption {
    pub title: String,

    #[serde(default)]
    pub protein: Vec<String>,

    #[serde(default)]
    pub veg: Vec<String>,

    #[serde(default)]
    pub extras: Vec<String>,
}

impl MenuOption {
    /// The dish's identity for repeat-avoidance: the first protein entry.
    pub fn primary_protein(&self) -> Option<&str> {
        self.protein.first().map(String::as_str)
    }

    /// Every ingredient the dish calls for, groups concatenated.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> + '_ {
        self.protein
            .iter()
            .chain(self.veg.iter())
            .chain(self.extras.iter())
            .map(String::as_str)
    }
}

/// The weekly menu: set key ("A" or "B") to day name to dish list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuBook(HashMap<String, HashMap<String, Vec<MenuOption>>>);

impl MenuBook {
    /// Load the menu book from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let book = serde_json::from_str(&content)?;
        Ok(book)
    }

    /// Dishes scheduled for the given set and day.
    ///
    /// A set or day absent from the book yields an empty slice, so a sparse
    /// menu file degrades to "nothing scheduled" instead of an error.
    pub fn options_for(&self, set_key: &str, day_name: &str) -> &[MenuOption] {
        self.0
            .get(set_key)
            .and_then(|days| days.get(day_name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
