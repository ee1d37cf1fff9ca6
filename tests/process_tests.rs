mod common;
use common::{
    HEADER_ONE_BLOCK, process_into, read_summary, rti, setup_test_dir, test_config, write_input,
};
use predicates::str::contains;
use std::fs;

#[test]
fn test_process_meeting_and_zero_length_break() {
    let dir = setup_test_dir("process_meeting_break");
    let input = write_input(
        &dir,
        "erms.csv",
        &[
            "Employee_ID,Created By,Department,Date,Start Time_1,End Time_1,Activity_1,Project_Entry_1,Description_1,Start Time_2,End Time_2,Activity_2,Project_Entry_2,Description_2",
            "E1,Ann,Ops,2024-01-01,09:00,11:00,Meeting,P1,Weekly,11:00,11:00,Break,,",
        ],
    );

    let out_dir = process_into(&dir, &input);
    let (header, rows) = read_summary(&out_dir.join("employee_date_activity_summary.csv"));

    assert_eq!(
        header,
        vec![
            "Employee_ID",
            "Created By",
            "Department",
            "Date",
            "Activity",
            "Project_Entry",
            "Description",
            "Hours",
            "Date_Total_Hours"
        ]
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec!["E1", "Ann", "Ops", "2024-01-01", "Meeting", "P1", "Weekly", "2.00", "2.00"]
    );
}

#[test]
fn test_process_picks_newest_csv_in_input_dir() {
    let dir = setup_test_dir("process_newest");
    let in_dir = dir.join("in");
    fs::create_dir_all(&in_dir).unwrap();

    write_input(&in_dir, "a_old.csv", &[HEADER_ONE_BLOCK, "OLD,Ann,Ops,2024-01-01,09:00,10:00,Call,,"]);
    std::thread::sleep(std::time::Duration::from_millis(1100));
    write_input(&in_dir, "b_new.csv", &[HEADER_ONE_BLOCK, "NEW,Bob,Ops,2024-01-02,09:00,10:30,Call,,"]);
    fs::write(in_dir.join("notes.txt"), "not a csv").unwrap();

    let out_dir = dir.join("out");
    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input-dir",
            &in_dir.to_string_lossy(),
            "--output-dir",
            &out_dir.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("b_new.csv"));

    let (_, rows) = read_summary(&out_dir.join("employee_date_activity_summary.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "NEW");
    assert_eq!(rows[0][7], "1.50");
}

#[test]
fn test_process_no_input_is_clean_exit() {
    let dir = setup_test_dir("process_no_input");
    let empty = dir.join("empty_in");
    fs::create_dir_all(&empty).unwrap();

    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input-dir",
            &empty.to_string_lossy(),
            "--output-dir",
            &dir.join("out").to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(contains("No CSV files found"));

    assert!(!dir.join("out").exists());
}

#[test]
fn test_process_missing_input_file_is_clean_exit() {
    let dir = setup_test_dir("process_missing_file");
    let missing = dir.join("erms_today.csv");

    rti()
        .args(["--config", &test_config(&dir), "process", "--input"])
        .arg(&missing)
        .args(["--output-dir", &dir.join("out").to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Input file not found"))
        .stdout(contains("erms_today.csv"));

    assert!(!dir.join("out").exists());
}

#[test]
fn test_process_schema_mismatch_fails_without_output() {
    let dir = setup_test_dir("process_schema_mismatch");
    let input = write_input(
        &dir,
        "no_blocks.csv",
        &["Employee_ID,Created By,Department,Date,Notes", "E1,Ann,Ops,2024-01-01,hello"],
    );

    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input",
            &input,
            "--output-dir",
            &dir.join("out").to_string_lossy(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Schema mismatch"));

    assert!(!dir.join("out").join("employee_date_activity_summary.csv").exists());
}

#[test]
fn test_process_all_rows_invalid_fails_with_empty_result() {
    let dir = setup_test_dir("process_empty_result");
    let input = write_input(
        &dir,
        "bad_times.csv",
        &[
            HEADER_ONE_BLOCK,
            "E1,Ann,Ops,2024-01-01,11:00,09:00,Meeting,,",
            "E2,Bob,Ops,2024-01-01,10:00,10:00,Meeting,,",
        ],
    );

    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input",
            &input,
            "--output-dir",
            &dir.join("out").to_string_lossy(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("No valid activity rows"));

    assert!(!dir.join("out").join("employee_date_activity_summary.csv").exists());
}

#[test]
fn test_process_dated_json_output() {
    let dir = setup_test_dir("process_dated_json");
    let input = write_input(
        &dir,
        "erms.csv",
        &[HEADER_ONE_BLOCK, "E1,Ann,,not-a-date,09:00,09:45,Review,,"],
    );
    let out_dir = dir.join("out");

    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input",
            &input,
            "--output-dir",
            &out_dir.to_string_lossy(),
            "--dated",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let path = out_dir.join(format!("employee_date_activity_summary_{today}.json"));
    let content = fs::read_to_string(&path).expect("read dated json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = v.as_array().expect("json array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Activity"], "Review");
    assert!(rows[0]["Date"].is_null());
    assert!(rows[0]["Department"].is_null());
    assert_eq!(rows[0]["Hours"], 0.75);
    assert_eq!(rows[0]["Date_Total_Hours"], 0.75);
}

#[test]
fn test_process_explicit_output_needs_force() {
    let dir = setup_test_dir("process_force");
    let input = write_input(&dir, "erms.csv", &[HEADER_ONE_BLOCK, "E1,Ann,Ops,2024-01-01,09:00,10:00,Call,,"]);
    let out = dir.join("summary.csv");
    fs::write(&out, "keep me").unwrap();

    rti()
        .args(["--config", &test_config(&dir), "process", "--input", &input, "--output"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rti()
        .args(["--config", &test_config(&dir), "process", "--input", &input, "--force", "--output"])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Employee_ID,"));
}

#[test]
fn test_process_failed_run_keeps_existing_output() {
    let dir = setup_test_dir("process_failed_keeps_output");
    let input = write_input(
        &dir,
        "bad_times.csv",
        &[HEADER_ONE_BLOCK, "E1,Ann,Ops,2024-01-01,11:00,09:00,Meeting,,"],
    );
    let out = dir.join("summary.csv");
    fs::write(&out, "previous summary").unwrap();

    rti()
        .args(["--config", &test_config(&dir), "process", "--input", &input, "--force", "--output"])
        .arg(&out)
        .assert()
        .failure()
        .code(1);

    assert_eq!(fs::read_to_string(&out).unwrap(), "previous summary");
}

#[test]
fn test_process_overwrite_replaces_whole_file() {
    let dir = setup_test_dir("process_overwrite_whole");
    let input = write_input(&dir, "erms.csv", &[HEADER_ONE_BLOCK, "E1,Ann,Ops,2024-01-01,09:00,10:00,Call,,"]);
    let out = dir.join("summary.json");
    fs::write(&out, "x".repeat(64 * 1024)).unwrap();

    rti()
        .args(["--config", &test_config(&dir), "process", "--input", &input, "--force", "--output"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json, no stale tail");
    assert_eq!(v.as_array().map(|a| a.len()), Some(1));
}

#[test]
fn test_process_xlsx_output() {
    let dir = setup_test_dir("process_xlsx");
    let input = write_input(&dir, "erms.csv", &[HEADER_ONE_BLOCK, "E1,Ann,Ops,2024-01-01,09:00,10:00,Call,,"]);
    let out = dir.join("summary.xlsx");

    rti()
        .args(["--config", &test_config(&dir), "process", "--input", &input, "--output"])
        .arg(&out)
        .assert()
        .success();

    let bytes = fs::read(&out).expect("xlsx written");
    // XLSX is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_process_preview_prints_table() {
    let dir = setup_test_dir("process_preview");
    let input = write_input(&dir, "erms.csv", &[HEADER_ONE_BLOCK, "E1,Ann,Ops,2024-01-01,09:00,10:00,Call,,"]);

    rti()
        .args([
            "--config",
            &test_config(&dir),
            "process",
            "--input",
            &input,
            "--output-dir",
            &dir.join("out").to_string_lossy(),
            "--preview",
        ])
        .assert()
        .success()
        .stdout(contains("Date_Total_Hours"))
        .stdout(contains("Summary rows"));
}

#[test]
fn test_inspect_reports_sparse_blocks() {
    let dir = setup_test_dir("inspect_sparse");
    let input = write_input(
        &dir,
        "sparse.csv",
        &[
            "Employee_ID,Created By,Department,Date,Start Time_3,End Time_3,Activity_3,Start Time_7,End Time_7,Activity_7",
            "E1,Ann,Ops,2024-01-01,09:00,10:00,Call,13:00,12:00,Late",
        ],
    );

    rti()
        .args(["--config", &test_config(&dir), "inspect", "--input", &input])
        .assert()
        .success()
        .stdout(contains("Non-positive"))
        .stdout(contains("1 activity entries kept"));
}
