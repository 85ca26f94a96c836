//! The flattened weight table

use crate::config::{self, RaceRef, WeightGroups};
use crate::error::{Result, ShapeshiftError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One flattened race reference with its selection weight
#[derive(Debug, Clone)]
pub struct WeightEntry {
    pub name: String,
    pub weight: u32,
    pub file: PathBuf,
    /// Metadata carried from the race reference and its book
    pub meta: BTreeMap<String, serde_yaml::Value>,
}

/// Ordered race references with relative selection weights
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: Vec<WeightEntry>,
}

impl WeightTable {
    /// Load a weights file and flatten it
    pub fn load(path: &Path) -> Result<Self> {
        let file = config::load_weights(path)?;
        Self::from_groups(file.weights)
    }

    /// Flatten every book's races, then the standalone race, in file order
    pub fn from_groups(groups: WeightGroups) -> Result<Self> {
        let mut entries = Vec::new();
        for book in groups.books {
            for race in book.races {
                entries.push(flatten(race, &book.book_meta)?);
            }
        }
        if let Some(race) = groups.race {
            entries.push(flatten(race, &BTreeMap::new())?);
        }
        Ok(WeightTable { entries })
    }

    #[inline]
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with a matching name, in table order
    pub fn find(&self, name: &str) -> Option<&WeightEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Weighted random draw over the table
    ///
    /// Entries sharing a name are indistinguishable: whichever is drawn,
    /// the first entry with that name wins, same as `find`.
    pub fn pick_random(&self) -> Option<&WeightEntry> {
        let drawn = super::pick_weighted(&self.entries)?;
        Some(self.find(&drawn.name).unwrap_or(drawn))
    }
}

/// Merge a race reference with its book's metadata
///
/// Fill-only: a key already present on the race reference is never
/// overwritten by book-meta. `w` and `file` are promoted to typed fields
/// and must be present on one side or the other.
fn flatten(
    race: RaceRef,
    book_meta: &BTreeMap<String, serde_yaml::Value>,
) -> Result<WeightEntry> {
    let RaceRef {
        name,
        w,
        file,
        mut extra,
    } = race;

    let weight = match w {
        Some(w) => w,
        None => book_meta
            .get("w")
            .and_then(|value| value.as_u64())
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| ShapeshiftError::IncompleteEntry {
                name: name.clone(),
                field: "w",
            })?,
    };

    let file = match file {
        Some(file) => file,
        None => book_meta
            .get("file")
            .and_then(|value| value.as_str())
            .map(PathBuf::from)
            .ok_or_else(|| ShapeshiftError::IncompleteEntry {
                name: name.clone(),
                field: "file",
            })?,
    };

    for (key, value) in book_meta {
        if matches!(key.as_str(), "name" | "w" | "file") {
            continue;
        }
        extra.entry(key.clone()).or_insert_with(|| value.clone());
    }

    Ok(WeightEntry {
        name,
        weight,
        file,
        meta: extra,
    })
}
