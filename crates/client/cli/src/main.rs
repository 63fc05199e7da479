//! Command line combat driver for delve crawlers.
//!
//! Run with: `cargo run -p delve-cli -- <command>`
mod config;
mod duel;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use delve_content::ContentFactory;
use delve_core::Crawler;

use config::CliConfig;
use duel::{Side, run_duel};

/// Pit crawlers from content files against each other
#[derive(Parser)]
#[command(name = "delve-cli")]
#[command(about = "Combat driver for delve crawlers", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides DELVE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List crawler templates in the content directory
    List,

    /// Fight two crawler templates until one dies
    Duel {
        /// Template id of the crawler striking first
        challenger: String,
        /// Template id of the crawler striking second
        defender: String,
        /// Round limit (overrides DELVE_MAX_ROUNDS)
        #[arg(long)]
        rounds: Option<u32>,
    },
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Command::List => list(&config),
        Command::Duel {
            challenger,
            defender,
            rounds,
        } => {
            if let Some(rounds) = rounds {
                config.max_rounds = rounds.max(1);
            }
            duel(&config, &challenger, &defender)
        }
    }
}

fn list(config: &CliConfig) -> Result<()> {
    let content = ContentFactory::new(&config.data_dir);
    let catalog = content.load_templates()?;

    for template in catalog.iter() {
        println!("{:<16} {:<8} {}", template.id, template.class, template.spec.name);
    }
    Ok(())
}

fn duel(config: &CliConfig, challenger_id: &str, defender_id: &str) -> Result<()> {
    let content = ContentFactory::new(&config.data_dir);
    let catalog = content.load_templates()?;
    let factory = content.crawler_factory()?;

    let lookup = |id: &str| {
        catalog
            .get(id)
            .with_context(|| format!("Unknown crawler template '{}'", id))
    };
    let mut challenger = factory.build(lookup(challenger_id)?)?;
    let mut defender = factory.build(lookup(defender_id)?)?;

    tracing::info!(
        challenger = challenger.display_name(),
        defender = defender.display_name(),
        max_rounds = config.max_rounds,
        "duel started"
    );

    let report = run_duel(challenger.as_mut(), defender.as_mut(), config.max_rounds)?;

    match report.winner {
        Some(Side::Challenger) => println!(
            "{} defeats {} in {} rounds",
            challenger.display_name(),
            defender.display_name(),
            report.rounds
        ),
        Some(Side::Defender) => println!(
            "{} defeats {} in {} rounds",
            defender.display_name(),
            challenger.display_name(),
            report.rounds
        ),
        None => println!("Draw after {} rounds", report.rounds),
    }
    println!(
        "  {}: Lv {} HP {}/{}",
        challenger.display_name(),
        challenger.level(),
        challenger.health(),
        challenger.max_health()
    );
    println!(
        "  {}: Lv {} HP {}/{}",
        defender.display_name(),
        defender.level(),
        defender.health(),
        defender.max_health()
    );
    Ok(())
}
