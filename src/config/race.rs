//! Race definition shapes

use crate::stats::Ability;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// One document of a race definition file
#[derive(Debug, Clone, Deserialize)]
pub struct RaceDoc {
    pub race: RaceStats,
}

/// A race template: stat bonuses and traits layered onto a character
#[derive(Debug, Clone, Deserialize)]
pub struct RaceStats {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "stats-bonus", default)]
    pub bonuses: BTreeMap<Ability, i32>,
    #[serde(rename = "skill-profs", default)]
    pub skill_profs: BTreeSet<String>,
    // "abilities" in the file format means special traits, not ability scores
    #[serde(rename = "abilities", default)]
    pub traits: BTreeSet<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_race_document() {
        let text = r#"
race:
  name: Hill Dwarf
  type: dwarf
  stats-bonus:
    constitution: 2
    wisdom: 1
  skill-profs:
    - perception
  abilities:
    - Darkvision
    - Dwarven Resilience
  languages:
    - Common
    - Dwarvish
"#;
        let doc: RaceDoc = serde_yaml::from_str(text).unwrap();
        let race = doc.race;
        assert_eq!(race.name, "Hill Dwarf");
        assert_eq!(race.kind, "dwarf");
        assert_eq!(race.bonuses.get(&Ability::Constitution), Some(&2));
        assert_eq!(race.bonuses.get(&Ability::Wisdom), Some(&1));
        assert!(race.bonuses.get(&Ability::Strength).is_none());
        assert!(race.skill_profs.contains("perception"));
        assert!(race.traits.contains("Darkvision"));
        assert!(race.languages.contains("Dwarvish"));
    }

    #[test]
    fn test_bonus_keys_parse_case_insensitively() {
        let text = r#"
race:
  name: Mountain Dwarf
  type: dwarf
  stats-bonus:
    Strength: 2
    CONSTITUTION: 2
"#;
        let doc: RaceDoc = serde_yaml::from_str(text).unwrap();
        assert_eq!(doc.race.bonuses.get(&Ability::Strength), Some(&2));
        assert_eq!(doc.race.bonuses.get(&Ability::Constitution), Some(&2));
    }

    #[test]
    fn test_unknown_bonus_ability_is_error() {
        let text = r#"
race:
  name: Broken
  type: none
  stats-bonus:
    luck: 2
"#;
        assert!(serde_yaml::from_str::<RaceDoc>(text).is_err());
    }

    #[test]
    fn test_sparse_race_document() {
        let text = r#"
race:
  name: Human
  type: human
"#;
        let doc: RaceDoc = serde_yaml::from_str(text).unwrap();
        assert!(doc.race.bonuses.is_empty());
        assert!(doc.race.skill_profs.is_empty());
        assert!(doc.race.traits.is_empty());
        assert!(doc.race.languages.is_empty());
    }
}
