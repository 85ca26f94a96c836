//! Text rendering of stat blocks and the roster listing
//!
//! Rendering is a pure function of the computed data; the same inputs
//! always produce byte-identical output.

use super::StatBlock;
use crate::roster::WeightTable;

/// Render a stat block as the multi-section report
pub fn render_stat_block(block: &StatBlock) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("RACE: {}", block.race_name));
    lines.push(format!("Type: {}", block.race_kind));

    lines.push(String::new());
    lines.push("======[ STATS ]======".to_string());
    for line in &block.abilities {
        let annotation = match line.race_bonus {
            Some(bonus) => format!(" (R{bonus:+})"),
            None => String::new(),
        };
        lines.push(format!(
            "{:<14}[{:+}] -- {:>2}{}",
            format!("{}:", line.ability),
            line.modifier,
            line.score,
            annotation,
        ));
    }

    lines.push(String::new());
    lines.push("======[ SAVES ]======".to_string());
    for line in &block.saves {
        lines.push(format!(
            "[{}] {:<14}[{:+}]",
            if line.proficient { 'X' } else { ' ' },
            format!("{}:", line.ability),
            line.bonus,
        ));
    }

    lines.push(String::new());
    lines.push("======[ SKILLS ]======".to_string());
    for line in &block.skills {
        lines.push(format!(
            "[{}] [{:>+3}] {:<16}- ({})",
            line.mark.glyph(),
            line.bonus,
            line.skill,
            line.ability.key(),
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Passive Wisdom (Perception): {}",
        block.passive_perception
    ));

    lines.push(String::new());
    lines.push("====[ ABILITIES ]======".to_string());
    for name in &block.traits {
        lines.push(format!(" * {name}"));
    }

    lines.push(String::new());
    lines.push("====[ LANGUAGES ]======".to_string());
    for language in &block.languages {
        lines.push(format!(" * {language}"));
    }

    lines.join("\n") + "\n"
}

/// Render the weight table, one row per entry in table order
pub fn render_roster(table: &WeightTable) -> String {
    let mut lines = vec![format!(
        "{:<8}{:<8}{:<20}{}",
        "Number", "Weight", "Name", "File"
    )];
    for (index, entry) in table.entries().iter().enumerate() {
        lines.push(format!(
            "{:<8}{:<8}{:<20}{}",
            format!(" [{index}]"),
            entry.weight,
            entry.name,
            entry.file.display(),
        ));
    }
    lines.join("\n") + "\n"
}
