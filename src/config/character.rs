//! Character sheet shapes

use crate::error::ShapeshiftError;
use crate::stats::{Ability, AbilityScores};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Top-level shape of a character sheet file
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDoc {
    pub character: RawCharacter,
}

/// Character sheet as written in YAML, before ability validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawCharacter {
    #[serde(rename = "stats-base")]
    pub stats_base: BTreeMap<String, i32>,
    #[serde(rename = "saving-throw-profs", default)]
    pub saving_throw_profs: BTreeSet<Ability>,
    #[serde(rename = "proficiency-bonus")]
    pub proficiency_bonus: i32,
    #[serde(rename = "skill-profs", default)]
    pub skill_profs: BTreeSet<String>,
    #[serde(rename = "abilities", default)]
    pub traits: BTreeSet<String>,
    #[serde(default)]
    pub languages: BTreeSet<String>,
}

/// Validated character sheet with typed ability scores
#[derive(Debug, Clone)]
pub struct PcStats {
    pub base: AbilityScores,
    pub save_profs: BTreeSet<Ability>,
    pub proficiency_bonus: i32,
    pub skill_profs: BTreeSet<String>,
    pub traits: BTreeSet<String>,
    pub languages: BTreeSet<String>,
}

impl TryFrom<RawCharacter> for PcStats {
    type Error = ShapeshiftError;

    fn try_from(raw: RawCharacter) -> Result<Self, Self::Error> {
        let base = AbilityScores::from_map(&raw.stats_base)?;
        Ok(PcStats {
            base,
            save_profs: raw.saving_throw_profs,
            proficiency_bonus: raw.proficiency_bonus,
            skill_profs: raw.skill_profs,
            traits: raw.traits,
            languages: raw.languages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"
character:
  stats-base:
    strength: 10
    dexterity: 13
    constitution: 12
    intelligence: 11
    wisdom: 14
    charisma: 15
  saving-throw-profs:
    - wisdom
    - charisma
  proficiency-bonus: 2
  skill-profs:
    - persuasion
    - insight
  abilities:
    - Spellcasting
  languages:
    - Common
"#;

    #[test]
    fn test_parse_and_validate_sheet() {
        let doc: CharacterDoc = serde_yaml::from_str(SHEET).unwrap();
        let pc = PcStats::try_from(doc.character).unwrap();
        assert_eq!(pc.base.get(Ability::Wisdom), 14);
        assert_eq!(pc.proficiency_bonus, 2);
        assert!(pc.save_profs.contains(&Ability::Wisdom));
        assert!(!pc.save_profs.contains(&Ability::Strength));
        assert!(pc.skill_profs.contains("persuasion"));
        assert!(pc.traits.contains("Spellcasting"));
    }

    #[test]
    fn test_incomplete_stats_base_is_error() {
        let text = r#"
character:
  stats-base:
    strength: 10
  proficiency-bonus: 2
"#;
        let doc: CharacterDoc = serde_yaml::from_str(text).unwrap();
        assert!(matches!(
            PcStats::try_from(doc.character),
            Err(ShapeshiftError::MissingAbility(_))
        ));
    }

    #[test]
    fn test_unknown_save_prof_is_error() {
        let text = r#"
character:
  stats-base:
    strength: 10
    dexterity: 10
    constitution: 10
    intelligence: 10
    wisdom: 10
    charisma: 10
  saving-throw-profs:
    - moxie
  proficiency-bonus: 2
"#;
        assert!(serde_yaml::from_str::<CharacterDoc>(text).is_err());
    }

    #[test]
    fn test_missing_character_key_is_error() {
        assert!(serde_yaml::from_str::<CharacterDoc>("pc: {}").is_err());
    }
}
