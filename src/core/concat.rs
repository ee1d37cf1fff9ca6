use crate::core::extractor::BlockExtract;
use crate::errors::{AppError, AppResult};
use crate::models::{DetailRow, WideTable};

/// Stack the surviving rows of every block into one detail table.
///
/// - no block columns in the header → `NoActivityData`
/// - block columns present but nothing survived → `EmptyResult`
pub fn concatenate(
    table: &WideTable,
    blocks: Vec<BlockExtract>,
    max_blocks: usize,
) -> AppResult<Vec<DetailRow>> {
    if !table.has_activity_blocks() {
        return Err(AppError::NoActivityData(max_blocks));
    }

    let details: Vec<DetailRow> = blocks.into_iter().flat_map(|b| b.rows).collect();

    if details.is_empty() {
        return Err(AppError::EmptyResult(table.source.clone()));
    }

    Ok(details)
}
