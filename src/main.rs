mod board;
mod config;
mod display;
mod food;
mod game;
mod input;
mod snake;
mod term;

use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::game::GameEngine;
use crate::term::TermManager;

pub type TermInt = u16;
pub type Coords = (i32, i32);

#[derive(Parser)]
#[command(name = "term-snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Board width, border included
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Board height, border included
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Error creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The screen belongs to the game, so logs only go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::new(cli.width, cli.height, cli.seed)?;
    let mut engine = GameEngine::new(&config);

    let mut term = TermManager::new()?;
    term.setup(engine.board())?;

    // Dropping `term` restores the screen if the game bails out early
    game::play(&mut engine, &mut term, config.tick)?;
    Ok(())
}
