//! Column names of the wide timesheet export and of the summary output.
//!
//! Input block columns carry a 1-based `_i` suffix
//! (`Start Time_1`, `End Time_1`, `Activity_1`, ...).

pub const EMPLOYEE_ID: &str = "Employee_ID";
pub const CREATED_BY: &str = "Created By";
pub const DEPARTMENT: &str = "Department";
pub const DATE: &str = "Date";

/// Identity columns every input row must carry.
pub const IDENTITY: [&str; 4] = [EMPLOYEE_ID, CREATED_BY, DEPARTMENT, DATE];

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const ACTIVITY: &str = "Activity";
pub const PROJECT_ENTRY: &str = "Project_Entry";
pub const DESCRIPTION: &str = "Description";

pub const HOURS: &str = "Hours";
pub const DATE_TOTAL_HOURS: &str = "Date_Total_Hours";

/// Default upper bound on block indices probed in the header.
pub const DEFAULT_MAX_BLOCKS: usize = 10;

/// Header pattern marking the presence of an activity block.
pub const BLOCK_MARKER_PATTERN: &str = r"^Start Time_(\d+)$";

/// Summary output header, in output order.
pub const OUTPUT_HEADERS: [&str; 9] = [
    EMPLOYEE_ID,
    CREATED_BY,
    DEPARTMENT,
    DATE,
    ACTIVITY,
    PROJECT_ENTRY,
    DESCRIPTION,
    HOURS,
    DATE_TOTAL_HOURS,
];

/// `<base>_<index>`, e.g. `block_column(ACTIVITY, 3)` → `Activity_3`.
pub fn block_column(base: &str, index: usize) -> String {
    format!("{base}_{index}")
}
