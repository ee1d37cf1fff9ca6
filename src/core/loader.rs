use crate::core::columns::{self, block_column};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityBlock, WideRow, WideTable};
use crate::utils::date::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell values read as null, on top of empty/blank cells.
const NA_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "<NA>",
];

/// Header positions of one activity block. Only `start` is guaranteed:
/// a companion column absent from the header reads as null on every row.
#[derive(Debug, Clone)]
struct BlockLayout {
    index: usize,
    start: usize,
    end: Option<usize>,
    activity: Option<usize>,
    project_entry: Option<usize>,
    description: Option<usize>,
}

/// Header positions of the identity columns and of every detected block.
#[derive(Debug, Clone)]
struct Layout {
    employee_id: usize,
    created_by: usize,
    department: usize,
    date: usize,
    blocks: Vec<BlockLayout>,
}

/// Load a wide timesheet CSV from disk.
pub fn load_path(path: &Path, max_blocks: usize) -> AppResult<WideTable> {
    let file = File::open(path)?;
    load_reader(file, &path.display().to_string(), max_blocks)
}

/// Load a wide timesheet CSV from any reader.
///
/// The `Date` column is parsed here (unparseable → `None`); block time
/// bounds are left as text for the extractor.
pub fn load_reader<R: Read>(reader: R, source: &str, max_blocks: usize) -> AppResult<WideTable> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let layout = resolve_layout(&headers, max_blocks)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(read_row(&record, &layout));
    }

    Ok(WideTable {
        source: source.to_string(),
        block_indices: layout.blocks.iter().map(|b| b.index).collect(),
        rows,
    })
}

/// Block indices (within `1..=max_blocks`) whose `Start Time_i` column exists.
///
/// Each index is tested on its own: a header with only blocks 3 and 7 yields `[3, 7]`.
pub fn detect_block_indices(headers: &StringRecord, max_blocks: usize) -> Vec<usize> {
    let marker = Regex::new(columns::BLOCK_MARKER_PATTERN).expect("valid block marker pattern");

    let mut found: Vec<usize> = headers
        .iter()
        .map(clean_header)
        .filter_map(|h| {
            marker
                .captures(h)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<usize>().ok())
        })
        .filter(|i| (1..=max_blocks).contains(i))
        .collect();

    found.sort_unstable();
    found.dedup();
    found
}

fn resolve_layout(headers: &StringRecord, max_blocks: usize) -> AppResult<Layout> {
    // First occurrence wins on duplicated header names
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (i, h) in headers.iter().enumerate() {
        positions.entry(clean_header(h)).or_insert(i);
    }

    let require = |name: &str| {
        positions
            .get(name)
            .copied()
            .ok_or_else(|| AppError::MissingColumn(name.to_string()))
    };

    let employee_id = require(columns::EMPLOYEE_ID)?;
    let created_by = require(columns::CREATED_BY)?;
    let department = require(columns::DEPARTMENT)?;
    let date = require(columns::DATE)?;

    let lookup = |base: &str, index: usize| positions.get(block_column(base, index).as_str()).copied();

    let blocks = detect_block_indices(headers, max_blocks)
        .into_iter()
        .filter_map(|index| {
            Some(BlockLayout {
                index,
                start: lookup(columns::START_TIME, index)?,
                end: lookup(columns::END_TIME, index),
                activity: lookup(columns::ACTIVITY, index),
                project_entry: lookup(columns::PROJECT_ENTRY, index),
                description: lookup(columns::DESCRIPTION, index),
            })
        })
        .collect();

    Ok(Layout {
        employee_id,
        created_by,
        department,
        date,
        blocks,
    })
}

fn read_row(record: &StringRecord, layout: &Layout) -> WideRow {
    let cell = |pos: Option<usize>| pos.and_then(|p| record.get(p)).and_then(null_if_na);

    WideRow {
        employee_id: cell(Some(layout.employee_id)),
        created_by: cell(Some(layout.created_by)),
        department: cell(Some(layout.department)),
        date: cell(Some(layout.date)).as_deref().and_then(parse_date),
        blocks: layout
            .blocks
            .iter()
            .map(|b| ActivityBlock {
                index: b.index,
                start_time: cell(Some(b.start)),
                end_time: cell(b.end),
                activity: cell(b.activity),
                project_entry: cell(b.project_entry),
                description: cell(b.description),
            })
            .collect(),
    }
}

/// `None` for blank cells and NA markers, the raw text otherwise.
pub fn null_if_na(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(raw.to_string())
    }
}

fn clean_header(h: &str) -> &str {
    h.trim_start_matches('\u{feff}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_sparse_blocks() {
        let headers = StringRecord::from(vec![
            "Employee_ID",
            "Start Time_3",
            "Start Time_7",
            "Start Time_11",
            "Start Time_x",
        ]);
        assert_eq!(detect_block_indices(&headers, 10), vec![3, 7]);
        assert_eq!(detect_block_indices(&headers, 12), vec![3, 7, 11]);
    }

    #[test]
    fn na_tokens_are_null() {
        assert_eq!(null_if_na(""), None);
        assert_eq!(null_if_na("   "), None);
        assert_eq!(null_if_na("NaN"), None);
        assert_eq!(null_if_na("N/A"), None);
        assert_eq!(null_if_na("Meeting"), Some("Meeting".to_string()));
    }

    #[test]
    fn missing_identity_column_is_fatal() {
        let data = "Employee_ID,Created By,Date,Start Time_1\nE1,Ann,2024-01-01,09:00\n";
        let err = load_reader(data.as_bytes(), "inline", 10).unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(c) if c == "Department"));
    }

    #[test]
    fn short_rows_read_as_null() {
        let data = "Employee_ID,Created By,Department,Date,Start Time_1,End Time_1,Activity_1\n\
                    E1,Ann,Ops,2024-01-01,09:00\n";
        let table = load_reader(data.as_bytes(), "inline", 10).unwrap();
        let block = table.rows[0].block(1).unwrap();
        assert_eq!(block.start_time.as_deref(), Some("09:00"));
        assert_eq!(block.end_time, None);
        assert_eq!(block.project_entry, None);
    }
}
