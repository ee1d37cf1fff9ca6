use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to reshape wide timesheet exports into daily activity summaries
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reshape a wide timesheet CSV export into a per-employee, per-day activity summary",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the input/output folders
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Summarize the newest (or a given) timesheet export
    Process {
        /// Input CSV file (default: newest *.csv in the input folder)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<String>,

        /// Folder scanned for the newest *.csv (overrides `input_dir`)
        #[arg(long = "input-dir", value_name = "DIR", conflicts_with = "input")]
        input_dir: Option<String>,

        /// Output file path (overrides folder, name and date suffix)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        /// Output folder (overrides `output_dir`)
        #[arg(long = "output-dir", value_name = "DIR", conflicts_with = "output")]
        output_dir: Option<String>,

        /// Append the run date (_YYYY-MM-DD) to the generated output name
        #[arg(long, conflicts_with = "output")]
        dated: bool,

        /// Output format (default: from --output extension, then config)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Highest activity block index probed in the header
        #[arg(long = "max-blocks", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        max_blocks: Option<u16>,

        /// Overwrite an existing --output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Also print the summary as a table
        #[arg(long)]
        preview: bool,
    },

    /// Show detected activity blocks and per-block row counts, without writing
    Inspect {
        /// Input CSV file (default: newest *.csv in the input folder)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<String>,

        /// Folder scanned for the newest *.csv (overrides `input_dir`)
        #[arg(long = "input-dir", value_name = "DIR", conflicts_with = "input")]
        input_dir: Option<String>,

        /// Highest activity block index probed in the header
        #[arg(long = "max-blocks", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        max_blocks: Option<u16>,
    },
}
