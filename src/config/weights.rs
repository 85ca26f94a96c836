//! Weights file shapes

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level shape of a weights file
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsFile {
    pub weights: WeightGroups,
}

/// The `weights:` mapping: books of race references plus an optional standalone race
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightGroups {
    #[serde(default)]
    pub books: Vec<BookEntry>,
    pub race: Option<RaceRef>,
}

/// One book grouping; its `book-meta` fields are shared by every race it lists
#[derive(Debug, Clone, Deserialize)]
pub struct BookEntry {
    #[serde(rename = "book-meta", default)]
    pub book_meta: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    pub races: Vec<RaceRef>,
}

/// A reference to one race definition
///
/// `w` and `file` may be omitted here and supplied by the enclosing
/// book's `book-meta` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct RaceRef {
    pub name: String,
    pub w: Option<u32>,
    pub file: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_books_and_standalone() {
        let text = r#"
weights:
  books:
    - book-meta:
        file: races/phb.yaml
        source: PHB
      races:
        - name: Hill Dwarf
          w: 3
        - name: High Elf
          w: 2
  race:
    name: Warforged
    w: 1
    file: races/homebrew.yaml
"#;
        let parsed: WeightsFile = serde_yaml::from_str(text).unwrap();
        assert_eq!(parsed.weights.books.len(), 1);

        let book = &parsed.weights.books[0];
        assert_eq!(book.races.len(), 2);
        assert_eq!(book.races[0].name, "Hill Dwarf");
        assert_eq!(book.races[0].w, Some(3));
        assert!(book.races[0].file.is_none());
        assert_eq!(
            book.book_meta.get("source").and_then(|v| v.as_str()),
            Some("PHB")
        );

        let standalone = parsed.weights.race.as_ref().unwrap();
        assert_eq!(standalone.name, "Warforged");
        assert_eq!(standalone.file, Some(PathBuf::from("races/homebrew.yaml")));
    }

    #[test]
    fn test_parse_extra_fields_carried() {
        let text = r#"
weights:
  race:
    name: Tabaxi
    w: 1
    file: races/volo.yaml
    setting: Forgotten Realms
"#;
        let parsed: WeightsFile = serde_yaml::from_str(text).unwrap();
        let standalone = parsed.weights.race.unwrap();
        assert_eq!(
            standalone.extra.get("setting").and_then(|v| v.as_str()),
            Some("Forgotten Realms")
        );
    }

    #[test]
    fn test_missing_weights_key_is_error() {
        assert!(serde_yaml::from_str::<WeightsFile>("races: []").is_err());
    }
}
