use chrono::NaiveDate;

/// One activity block (`Start Time_i`, `End Time_i`, `Activity_i`, ...) of a wide row.
///
/// Time bounds stay as raw text here: they are parsed during block
/// extraction, where an unparseable value simply drops the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityBlock {
    pub index: usize,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity: Option<String>,
    pub project_entry: Option<String>,
    pub description: Option<String>,
}

/// One row of the wide export: one employee, one day, N activity blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideRow {
    pub employee_id: Option<String>,
    pub created_by: Option<String>,
    pub department: Option<String>,
    pub date: Option<NaiveDate>, // None ⇔ missing or unparseable
    pub blocks: Vec<ActivityBlock>,
}

impl WideRow {
    pub fn block(&self, index: usize) -> Option<&ActivityBlock> {
        self.blocks.iter().find(|b| b.index == index)
    }
}

/// The whole input table, plus the block indices its header defines.
#[derive(Debug, Clone, Default)]
pub struct WideTable {
    pub source: String,
    pub block_indices: Vec<usize>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    pub fn has_activity_blocks(&self) -> bool {
        !self.block_indices.is_empty()
    }
}
