use crate::core::aggregator::aggregate;
use crate::core::concat::concatenate;
use crate::core::extractor::{BlockExtract, extract_all};
use crate::core::loader;
use crate::errors::AppResult;
use crate::models::{SummaryRow, WideTable};
use std::io::Read;
use std::path::Path;

/// Per-block outcome, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStats {
    pub index: usize,
    pub kept: usize,
    pub incomplete: usize,
    pub unparseable: usize,
    pub non_positive: usize,
}

impl From<&BlockExtract> for BlockStats {
    fn from(b: &BlockExtract) -> Self {
        Self {
            index: b.index,
            kept: b.kept(),
            incomplete: b.incomplete,
            unparseable: b.unparseable,
            non_positive: b.non_positive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub input_rows: usize,
    pub blocks: Vec<BlockStats>,
    pub detail_rows: usize,
    pub summary_rows: usize,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub rows: Vec<SummaryRow>,
    pub stats: PipelineStats,
}

/// The reshape-and-aggregate transformation.
///
/// Pure and stateless: one wide table in, one summary out. All file
/// discovery and writing lives with the caller.
pub struct Core;

impl Core {
    pub fn summarize(table: &WideTable, max_blocks: usize) -> AppResult<Summary> {
        let blocks = extract_all(table);
        let block_stats: Vec<BlockStats> = blocks.iter().map(BlockStats::from).collect();

        let details = concatenate(table, blocks, max_blocks)?;
        let rows = aggregate(&details);

        let stats = PipelineStats {
            input_rows: table.rows.len(),
            blocks: block_stats,
            detail_rows: details.len(),
            summary_rows: rows.len(),
        };

        Ok(Summary { rows, stats })
    }

    /// Block-level statistics without aggregating; never fails on empty results.
    pub fn inspect(table: &WideTable) -> PipelineStats {
        let blocks = extract_all(table);
        PipelineStats {
            input_rows: table.rows.len(),
            detail_rows: blocks.iter().map(BlockExtract::kept).sum(),
            blocks: blocks.iter().map(BlockStats::from).collect(),
            summary_rows: 0,
        }
    }

    pub fn summarize_path(path: &Path, max_blocks: usize) -> AppResult<Summary> {
        let table = loader::load_path(path, max_blocks)?;
        Self::summarize(&table, max_blocks)
    }

    pub fn summarize_reader<R: Read>(reader: R, source: &str, max_blocks: usize) -> AppResult<Summary> {
        let table = loader::load_reader(reader, source, max_blocks)?;
        Self::summarize(&table, max_blocks)
    }
}
