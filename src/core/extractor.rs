use crate::core::calculator::duration::positive_hours;
use crate::models::{DetailRow, WideRow, WideTable};
use crate::utils::time::{fallback_anchor, parse_timestamp};

/// Rows of one block and what happened to them.
#[derive(Debug, Clone, Default)]
pub struct BlockExtract {
    pub index: usize,
    pub rows: Vec<DetailRow>,
    /// Activity, start or end missing.
    pub incomplete: usize,
    /// Start or end present but not a recognisable timestamp.
    pub unparseable: usize,
    /// End not strictly after start.
    pub non_positive: usize,
}

impl BlockExtract {
    pub fn kept(&self) -> usize {
        self.rows.len()
    }
}

/// Why a block entry was left out of the detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Incomplete,
    Unparseable,
    NonPositive,
}

/// Extract every block the table's header defines, in index order.
pub fn extract_all(table: &WideTable) -> Vec<BlockExtract> {
    table
        .block_indices
        .iter()
        .map(|&index| extract_block(table, index))
        .collect()
}

/// Slice block `index` out of every wide row, keep the complete entries
/// with a strictly positive duration and rename them to the unified shape.
///
/// The block number does not survive: only the entry content does.
pub fn extract_block(table: &WideTable, index: usize) -> BlockExtract {
    let mut out = BlockExtract {
        index,
        ..Default::default()
    };

    for row in &table.rows {
        match entry_from_row(row, index) {
            Ok(detail) => out.rows.push(detail),
            Err(Rejection::Incomplete) => out.incomplete += 1,
            Err(Rejection::Unparseable) => out.unparseable += 1,
            Err(Rejection::NonPositive) => out.non_positive += 1,
        }
    }

    out
}

fn entry_from_row(row: &WideRow, index: usize) -> Result<DetailRow, Rejection> {
    let block = row.block(index).ok_or(Rejection::Incomplete)?;

    let (Some(activity), Some(start_raw), Some(end_raw)) =
        (&block.activity, &block.start_time, &block.end_time)
    else {
        return Err(Rejection::Incomplete);
    };

    let anchor = row.date.unwrap_or_else(fallback_anchor);
    let start = parse_timestamp(start_raw, anchor).ok_or(Rejection::Unparseable)?;
    let end = parse_timestamp(end_raw, anchor).ok_or(Rejection::Unparseable)?;

    let hours = positive_hours(start, end).ok_or(Rejection::NonPositive)?;

    Ok(DetailRow {
        employee_id: row.employee_id.clone(),
        created_by: row.created_by.clone(),
        department: row.department.clone(),
        date: row.date,
        activity: activity.clone(),
        project_entry: block.project_entry.clone(),
        description: block.description.clone(),
        hours,
    })
}
