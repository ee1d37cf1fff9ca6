use crate::core::loader;
use crate::core::logic::{Core, PipelineStats};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, OutputTarget, get_headers, summary_to_table};
use crate::models::SummaryRow;
use crate::ui::messages::{header, info, stat};
use crate::utils::path::latest_csv_in;
use crate::utils::table::{Column, Table};
use std::path::PathBuf;

/// Where the wide export comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A fixed file; a missing file counts as "no input".
    File(PathBuf),
    /// Newest `*.csv` inside a folder.
    Newest(PathBuf),
}

impl InputSource {
    pub fn resolve(&self) -> AppResult<PathBuf> {
        match self {
            InputSource::File(p) if p.is_file() => Ok(p.clone()),
            InputSource::File(p) => Err(AppError::InputFileMissing(p.display().to_string())),
            InputSource::Newest(dir) => latest_csv_in(dir),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub input: InputSource,
    pub output: OutputTarget,
    pub format: ExportFormat,
    pub max_blocks: usize,
    pub force: bool,
    pub preview: bool,
}

/// High-level logic for the `process` and `inspect` commands:
/// find the input, run the core transformation, write the result.
pub struct ProcessLogic;

impl ProcessLogic {
    /// Full run. Nothing is written unless the whole summary was built.
    pub fn run(opts: &ProcessOptions) -> AppResult<PathBuf> {
        let input = opts.input.resolve()?;
        info(format!("Processing file: {}", input.display()));

        let summary = Core::summarize_path(&input, opts.max_blocks)?;
        report_stats(&summary.stats);

        if opts.preview {
            header("Summary preview");
            print!("{}", render_preview(&summary.rows));
        }

        ExportLogic::export(&summary.rows, opts.format, &opts.output, opts.force)
    }

    /// Load and extract only; reports what each block contributes.
    pub fn inspect(input: &InputSource, max_blocks: usize) -> AppResult<PipelineStats> {
        let path = input.resolve()?;
        info(format!("Inspecting file: {}", path.display()));

        let table = loader::load_path(&path, max_blocks)?;
        if !table.has_activity_blocks() {
            return Err(AppError::NoActivityData(max_blocks));
        }

        let stats = Core::inspect(&table);
        print!("{}", render_block_stats(&stats));
        Ok(stats)
    }
}

fn report_stats(stats: &PipelineStats) {
    let indices: Vec<String> = stats.blocks.iter().map(|b| b.index.to_string()).collect();
    stat("Input rows", stats.input_rows);
    stat("Activity blocks", indices.join(", "));
    stat("Activity entries kept", stats.detail_rows);
    stat("Summary rows", stats.summary_rows);
}

/// Summary rows as a fixed-width terminal table.
pub fn render_preview(rows: &[SummaryRow]) -> String {
    let columns = get_headers()
        .into_iter()
        .enumerate()
        .map(|(i, h)| if i >= 7 { Column::right(h) } else { Column::left(h) })
        .collect();

    let mut table = Table::new(columns);
    for row in summary_to_table(rows) {
        table.add_row(row);
    }
    table.render()
}

/// Per-block counts as a terminal table.
pub fn render_block_stats(stats: &PipelineStats) -> String {
    let mut table = Table::new(vec![
        Column::right("Block"),
        Column::right("Kept"),
        Column::right("Incomplete"),
        Column::right("Unparseable"),
        Column::right("Non-positive"),
    ]);

    for b in &stats.blocks {
        table.add_row(vec![
            b.index.to_string(),
            b.kept.to_string(),
            b.incomplete.to_string(),
            b.unparseable.to_string(),
            b.non_positive.to_string(),
        ]);
    }

    let mut out = table.render();
    out.push_str(&format!(
        "\n{} input rows, {} activity entries kept\n",
        stats.input_rows, stats.detail_rows
    ));
    out
}
