use crate::cli::commands::process::input_source;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::ProcessLogic;
use crate::errors::AppResult;

/// Handle the `inspect` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect {
        input,
        input_dir,
        max_blocks,
    } = cmd
    {
        let source = input_source(input, input_dir, cfg);
        let max_blocks = max_blocks.map(usize::from).unwrap_or(cfg.max_blocks);
        ProcessLogic::inspect(&source, max_blocks)?;
    }
    Ok(())
}
