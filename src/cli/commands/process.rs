use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::{InputSource, ProcessLogic, ProcessOptions};
use crate::errors::AppResult;
use crate::export::naming::format_from_path;
use crate::export::OutputTarget;
use crate::ui::messages::success;
use crate::utils::date::today;
use crate::utils::path::expand_tilde;

/// Input selection shared by `process` and `inspect`:
/// `--input` file, else `--input-dir`, else the configured folder.
pub(crate) fn input_source(
    input: &Option<String>,
    input_dir: &Option<String>,
    cfg: &Config,
) -> InputSource {
    match (input, input_dir) {
        (Some(file), _) => InputSource::File(expand_tilde(file)),
        (None, Some(dir)) => InputSource::Newest(expand_tilde(dir)),
        (None, None) => InputSource::Newest(expand_tilde(&cfg.input_dir)),
    }
}

/// Handle the `process` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        input,
        input_dir,
        output,
        output_dir,
        dated,
        format,
        max_blocks,
        force,
        preview,
    } = cmd
    {
        let target = match output {
            Some(file) => OutputTarget::Explicit(expand_tilde(file)),
            None => OutputTarget::Generated {
                dir: expand_tilde(output_dir.as_deref().unwrap_or(&cfg.output_dir)),
                stem: cfg.output_name.clone(),
                run_date: (*dated || cfg.dated_output).then(today),
            },
        };

        // --format, then the --output extension, then config
        let format = format
            .or_else(|| match &target {
                OutputTarget::Explicit(p) => format_from_path(p),
                OutputTarget::Generated { .. } => None,
            })
            .unwrap_or(cfg.output_format);

        let opts = ProcessOptions {
            input: input_source(input, input_dir, cfg),
            output: target,
            format,
            max_blocks: max_blocks.map(usize::from).unwrap_or(cfg.max_blocks),
            force: *force,
            preview: *preview,
        };

        let path = ProcessLogic::run(&opts)?;
        success(format!("Summary created successfully: {}", path.display()));
    }
    Ok(())
}
