//! Stat block computation
//!
//! Pure derivation: a `StatBlock` is computed from a character sheet and
//! a race template without modifying either. Everything the renderer
//! prints lives here as plain data.

use crate::config::{PcStats, RaceStats};
use crate::stats::{score_modifier, Ability, ProfMark, SKILLS};

/// One ability line: final score, modifier, and any race bonus applied
#[derive(Debug, Clone, Copy)]
pub struct AbilityLine {
    pub ability: Ability,
    pub score: i32,
    pub modifier: i32,
    pub race_bonus: Option<i32>,
}

/// One saving throw line
#[derive(Debug, Clone, Copy)]
pub struct SaveLine {
    pub ability: Ability,
    pub bonus: i32,
    pub proficient: bool,
}

/// One skill line
#[derive(Debug, Clone, Copy)]
pub struct SkillLine {
    pub skill: &'static str,
    pub ability: Ability,
    pub bonus: i32,
    pub mark: ProfMark,
}

/// Fully derived stat block for one character + race combination
#[derive(Debug, Clone)]
pub struct StatBlock {
    pub race_name: String,
    pub race_kind: String,
    pub abilities: [AbilityLine; 6],
    pub saves: [SaveLine; 6],
    pub skills: [SkillLine; 18],
    pub passive_perception: i32,
    pub traits: Vec<String>,
    pub languages: Vec<String>,
}

impl StatBlock {
    /// Derive every display value from the character sheet and race
    pub fn build(pc: &PcStats, race: &RaceStats) -> Self {
        let abilities = Ability::ALL.map(|ability| {
            let race_bonus = race.bonuses.get(&ability).copied();
            let score = pc.base.get(ability) + race_bonus.unwrap_or(0);
            AbilityLine {
                ability,
                score,
                modifier: score_modifier(score),
                race_bonus,
            }
        });

        let modifier_of = |ability: Ability| abilities[ability as usize].modifier;

        let saves = Ability::ALL.map(|ability| {
            let proficient = pc.save_profs.contains(&ability);
            let mut bonus = modifier_of(ability);
            if proficient {
                bonus += pc.proficiency_bonus;
            }
            SaveLine {
                ability,
                bonus,
                proficient,
            }
        });

        let skills = SKILLS.map(|(skill, ability)| {
            let mark = ProfMark::resolve(
                pc.skill_profs.contains(skill),
                race.skill_profs.contains(skill),
            );
            let mut bonus = modifier_of(ability);
            if mark.is_proficient() {
                // Added once even when both the PC and the race grant it
                bonus += pc.proficiency_bonus;
            }
            SkillLine {
                skill,
                ability,
                bonus,
                mark,
            }
        });

        // Keyed off the Wisdom saving-throw proficiency, not the
        // Perception skill proficiency. Known quirk, preserved.
        let mut passive_perception = 10 + modifier_of(Ability::Wisdom);
        if pc.save_profs.contains(&Ability::Wisdom) {
            passive_perception += pc.proficiency_bonus;
        }

        StatBlock {
            race_name: race.name.clone(),
            race_kind: race.kind.clone(),
            abilities,
            saves,
            skills,
            passive_perception,
            traits: pc.traits.union(&race.traits).cloned().collect(),
            languages: pc.languages.union(&race.languages).cloned().collect(),
        }
    }
}
