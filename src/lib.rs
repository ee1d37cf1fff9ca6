//! rTimesheet library root.
//! Exposes the CLI parser, the high-level run() function and the
//! reshape-and-aggregate core used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Process { .. } => cli::commands::process::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ risolvi il file di configurazione (override da riga di comando)
    let cfg_path = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // 3️⃣ carica config UNA sola volta
    let cfg = Config::load_from(&cfg_path)?;

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
