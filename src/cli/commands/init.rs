use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` subcommand
pub fn handle(cmd: &Commands, cfg_path: &Path) -> AppResult<()> {
    if let Commands::Init = cmd {
        let cfg = Config::init_all(cfg_path)?;

        success(format!("Config file:   {}", cfg_path.display()));
        success(format!("Input folder:  {}", cfg.input_dir));
        success(format!("Output folder: {}", cfg.output_dir));
    }
    Ok(())
}
