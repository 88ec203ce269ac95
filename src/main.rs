use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tictactoe::ai::SamplingMode;
use tictactoe::config::AppConfig;
use tictactoe::ui::{App, Console};

/// Play Tic-Tac-Toe in the terminal against a human or the computer.
///
/// At the prompt, type `start <x> <o>` where each side is `user`, `easy`,
/// `medium` or `hard`, or `exit` to quit.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Play Tic-Tac-Toe in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "tictactoe.toml")]
    config: PathBuf,

    /// Seed for reproducible computer moves
    #[arg(long)]
    seed: Option<u64>,

    /// Override the pause before computer moves, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Random move sampling: uniform or rejection
    #[arg(long)]
    sampling: Option<SamplingMode>,
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
    if let Some(seed) = cli.seed {
        config.strategy.seed = Some(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.play.move_delay_ms = delay_ms;
    }
    if let Some(sampling) = cli.sampling {
        config.strategy.random_sampling = sampling;
    }
    config.validate().context("invalid configuration")?;

    let mut app = App::new(Console::stdio(), config);
    app.run().context("game aborted")?;
    Ok(())
}
