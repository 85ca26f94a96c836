//! Configuration loading
//!
//! All three file formats are YAML: the weights file, race definition
//! files (multi-document streams), and the character sheet. Every loader
//! reads the whole file, parses, and returns a typed value; any failure
//! is fatal to the run.

mod character;
mod race;
mod weights;

pub use character::*;
pub use race::*;
pub use weights::*;

use crate::error::{Result, ShapeshiftError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ShapeshiftError::Load {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_error(path: &Path, source: serde_yaml::Error) -> ShapeshiftError {
    ShapeshiftError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Load and parse a weights file
pub fn load_weights(path: &Path) -> Result<WeightsFile> {
    let text = read_file(path)?;
    serde_yaml::from_str(&text).map_err(|source| parse_error(path, source))
}

/// Load a character sheet and validate it into typed stats
pub fn load_character(path: &Path) -> Result<PcStats> {
    let text = read_file(path)?;
    let doc: CharacterDoc =
        serde_yaml::from_str(&text).map_err(|source| parse_error(path, source))?;
    doc.character.try_into()
}

/// Load the race named `name` from a multi-document race definition file
///
/// The file is a YAML stream; each document holds one `race` mapping.
/// The first document whose race name matches exactly wins.
pub fn load_race_stats(path: &Path, name: &str) -> Result<RaceStats> {
    let text = read_file(path)?;
    for document in serde_yaml::Deserializer::from_str(&text) {
        let doc = RaceDoc::deserialize(document).map_err(|source| parse_error(path, source))?;
        if doc.race.name == name {
            return Ok(doc.race);
        }
    }
    Err(ShapeshiftError::RaceStatsNotFound {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}
