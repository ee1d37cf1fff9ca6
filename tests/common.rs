#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER_ONE_BLOCK: &str =
    "Employee_ID,Created By,Department,Date,Start Time_1,End Time_1,Activity_1,Project_Entry_1,Description_1";

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Fresh, empty working folder inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config path inside the test folder, so tests never read the user's config
pub fn test_config(dir: &PathBuf) -> String {
    dir.join("rtimesheet.conf").to_string_lossy().to_string()
}

/// Write `lines` as a CSV file in `dir` and return its path
pub fn write_input(dir: &PathBuf, file: &str, lines: &[&str]) -> String {
    let path = dir.join(file);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("write input csv");
    path.to_string_lossy().to_string()
}

/// Run `process` on `input`, writing into `<dir>/out`; returns the output folder
pub fn process_into(dir: &PathBuf, input: &str) -> PathBuf {
    let out_dir = dir.join("out");
    rti()
        .args([
            "--config",
            &test_config(dir),
            "process",
            "--input",
            input,
            "--output-dir",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success();
    out_dir
}

/// Parse a summary CSV into header + records
pub fn read_summary(path: &PathBuf) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::Reader::from_path(path).expect("open summary");
    let header = rdr
        .headers()
        .expect("summary header")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = rdr
        .records()
        .map(|r| r.expect("summary row").iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}
