//! FOODWEB - CLI Entry Point
//!
//! Resolves the encounters described in a scenario file.

use clap::{Parser, Subcommand};
use foodweb::{try_encounter, try_encounter_series, Config, Encounter, EncounterStats, Organism};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "foodweb")]
#[command(version)]
#[command(about = "Deterministic encounter rules for plants, herbivores, carnivores and omnivores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every encounter and series in a scenario
    Run {
        /// Scenario file (YAML)
        #[arg(short, long, default_value = "scenario.yaml")]
        scenario: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the default scenario file
    Init {
        /// Output path
        #[arg(short, long, default_value = "scenario.yaml")]
        output: PathBuf,
    },
}

/// Everything a run produced
#[derive(Serialize)]
struct Report {
    encounters: Vec<Encounter<String>>,
    series: Vec<Organism<String>>,
    stats: EncounterStats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario, json } => run_scenario(scenario, json),
        Commands::Init { output } => generate_scenario(output),
    }
}

fn load_scenario(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    if path.exists() {
        Ok(Config::from_file(path)?)
    } else {
        Ok(Config::default())
    }
}

fn run_scenario(path: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_scenario(&path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    if path.exists() {
        log::info!("Loaded scenario from {:?}", path);
    } else {
        log::info!("{:?} not found, using default scenario", path);
    }

    let mut report = Report {
        encounters: Vec::with_capacity(config.encounters.len()),
        series: Vec::with_capacity(config.series.len()),
        stats: EncounterStats::new(),
    };

    for [a, b] in &config.encounters {
        let result = try_encounter(config.resolve(a)?, config.resolve(b)?)?;
        report.stats.record(&result);
        if !json {
            println!("{} vs {}: {:?}", a, b, result.kind());
            println!("  {}", result.first);
            println!("  {}", result.second);
            if let Some(child) = &result.offspring {
                println!("  offspring: {}", child);
            }
        }
        report.encounters.push(result);
    }

    for chain in &config.series {
        let (head, rest) = match chain.split_first() {
            Some(split) => split,
            None => continue,
        };
        let followers = rest
            .iter()
            .map(|name| config.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;
        let survivor = try_encounter_series(config.resolve(head)?, followers)?;
        if !json {
            println!("series {}: {}", chain.join(" -> "), survivor);
        }
        report.series.push(survivor);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("{}", report.stats.summary());
    }

    Ok(())
}

fn generate_scenario(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    config.save(&output)?;
    log::info!("Scenario saved to {:?}", output);
    Ok(())
}
