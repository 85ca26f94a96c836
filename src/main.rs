//! Command-line entry point

use clap::{CommandFactory, Parser, Subcommand};
use shapeshift::config;
use shapeshift::error::{Result, ShapeshiftError};
use shapeshift::roster::{WeightEntry, WeightTable};
use shapeshift::sheet::{render_roster, render_stat_block, StatBlock};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Weighted race selection and stat block generation
#[derive(Parser)]
#[command(name = "shapeshift")]
#[command(about = "Weighted race selection and stat block generation", long_about = None)]
#[command(version)]
struct Cli {
    /// Weights file listing the selectable races
    #[arg(long, default_value = "race-weights.yaml", global = true)]
    weights: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the weight table
    List,

    /// Select a race at random and print the stat block
    Random {
        /// Character sheet file
        pc_stats: PathBuf,
    },

    /// Select a named race and print the stat block
    Specific {
        /// Character sheet file
        pc_stats: PathBuf,

        /// Name of the race in the weight table
        race_name: String,
    },
}

fn print_block(entry: &WeightEntry, pc_stats: &Path) -> Result<()> {
    let pc = config::load_character(pc_stats)?;
    let race = config::load_race_stats(&entry.file, &entry.name)?;
    print!("{}", render_stat_block(&StatBlock::build(&pc, &race)));
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let table = WeightTable::load(&cli.weights)?;

    match &cli.command {
        Command::List => {
            print!("{}", render_roster(&table));
        }
        Command::Random { pc_stats } => {
            let entry = table
                .pick_random()
                .ok_or(ShapeshiftError::EmptyWeightTable)?;
            print_block(entry, pc_stats)?;
        }
        Command::Specific {
            pc_stats,
            race_name,
        } => {
            let entry = table
                .find(race_name)
                .ok_or_else(|| ShapeshiftError::RaceNotFound(race_name.clone()))?;
            print_block(entry, pc_stats)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, ShapeshiftError::RaceNotFound(_)) {
                let _ = Cli::command().print_help();
            }
            ExitCode::FAILURE
        }
    }
}
