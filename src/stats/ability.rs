//! The six core abilities and modifier arithmetic

use crate::error::{Result, ShapeshiftError};
use serde::de::{self, Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The six core abilities, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    /// All abilities in display order
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Lowercase storage form used as the YAML key
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    /// Display-cased name
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = ShapeshiftError;

    /// Case-insensitive: accepts both the storage form and the display form
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strength" => Ok(Ability::Strength),
            "dexterity" => Ok(Ability::Dexterity),
            "constitution" => Ok(Ability::Constitution),
            "intelligence" => Ok(Ability::Intelligence),
            "wisdom" => Ok(Ability::Wisdom),
            "charisma" => Ok(Ability::Charisma),
            _ => Err(ShapeshiftError::UnknownAbility(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Ability {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Ability modifier: floor((score - 10) / 2)
///
/// Floor division, not truncation toward zero: score 7 is -2, not -1.
#[inline]
pub fn score_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Dense score set covering all six abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores([i32; 6]);

impl AbilityScores {
    /// Build from a parsed YAML mapping, which must name exactly the six abilities
    pub fn from_map(map: &BTreeMap<String, i32>) -> Result<Self> {
        let mut scores = [None; 6];
        for (key, value) in map {
            let ability: Ability = key.parse()?;
            scores[ability.index()] = Some(*value);
        }

        let mut values = [0; 6];
        for ability in Ability::ALL {
            values[ability.index()] = scores[ability.index()]
                .ok_or(ShapeshiftError::MissingAbility(ability.key()))?;
        }
        Ok(AbilityScores(values))
    }

    #[inline]
    pub fn get(&self, ability: Ability) -> i32 {
        self.0[ability.index()]
    }
}
