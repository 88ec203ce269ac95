use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe::ai::Difficulty;
use tictactoe::config::AppConfig;
use tictactoe::session::play_match;

/// Play many headless games between two difficulty levels.
#[derive(Parser)]
#[command(name = "arena", about = "Pit two Tic-Tac-Toe difficulty levels against each other")]
struct Cli {
    /// First contender: easy, medium or hard
    #[arg(long, default_value = "hard")]
    first: Difficulty,

    /// Second contender: easy, medium or hard
    #[arg(long, default_value = "easy")]
    second: Difficulty,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Base seed; each game derives its own
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        config.strategy.seed = Some(seed);
    }
    config.validate().context("invalid configuration")?;

    let report = play_match(cli.first, cli.second, &config.arena, &config.strategy)
        .context("playing arena match")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
        return Ok(());
    }

    println!(
        "{} vs {} over {} games",
        report.first, report.second, report.games
    );
    println!("-------------------------------------------");
    println!(
        "{:<8} wins: {:>5} ({:.1}%)",
        report.first,
        report.first_wins,
        report.first_win_rate() * 100.0
    );
    println!(
        "{:<8} wins: {:>5} ({:.1}%)",
        report.second,
        report.second_wins,
        report.second_win_rate() * 100.0
    );
    println!(
        "draws:          {:>5} ({:.1}%)",
        report.draws,
        report.draw_rate() * 100.0
    );
    println!("avg game length: {:.1} plies", report.average_game_length());
    Ok(())
}
