//! Integration tests for the `shiftcal` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::{NamedTempFile, TempDir};

const RECORDS: &str = r#"[
    {"id": "c", "title": "Frei", "start": "2025-01-08", "end": "2025-01-08", "colorId": 2},
    {"id": "a", "title": "6 - 14 <small>Kasse:</small> 1", "start": "2025-01-06", "end": "2025-01-06", "colorId": 0},
    {"id": "b", "title": "6 - 14 <small>Kasse:</small> 1", "start": "2025-01-07", "end": "2025-01-07", "colorId": 0},
    {"id": "d", "title": "10 - 17 <small>Kasse:</small> 2", "start": "2025-02-03", "end": "2025-02-03", "colorId": 3},
    {"id": "e", "title": "Urlaub", "start": "2025-01-20", "end": "2025-01-20", "colorId": 9}
]"#;

fn records_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RECORDS.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Runs the binary with an isolated home so no user config leaks in.
fn shiftcal(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shiftcal"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("SC_WINDOW")
        .args(args)
        .output()
        .expect("failed to run shiftcal")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "shiftcal failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_summary_json_totals_and_blocks() {
    let home = TempDir::new().unwrap();
    let records = records_file();
    let path = records.path().to_str().unwrap();

    let output = shiftcal(&home, &["summary", "--records", path, "--month", "2025-01", "--json"]);
    let result = stdout_json(&output);

    // Only January shifts count: 8 + 8 hours, 0.5 + 0.5 break.
    assert_eq!(result["totalHours"], 16);
    assert_eq!(result["totalBreak"], 1.0);

    let sorted: Vec<&str> = result["sortedEvents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(sorted, vec!["a", "b", "c", "e", "d"]);

    let merged = result["mergedEvents"].as_array().unwrap();
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0]["start"], "2025-01-06");
    assert_eq!(merged[0]["end"], "2025-01-08");
    assert_eq!(merged[2]["backgroundColor"], "#FFFFFF");
}

#[test]
fn test_summary_other_month_counts_other_shifts() {
    let home = TempDir::new().unwrap();
    let records = records_file();
    let path = records.path().to_str().unwrap();

    let output = shiftcal(&home, &["summary", "--records", path, "--month", "2025-02", "--json"]);
    let result = stdout_json(&output);

    assert_eq!(result["totalHours"], 7);
    assert_eq!(result["totalBreak"], 0.25);
    assert_eq!(result["sortedEvents"].as_array().unwrap().len(), 5);
}

#[test]
fn test_summary_reads_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_shiftcal"))
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["summary", "--records", "-", "--month", "2025-01"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn shiftcal");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(RECORDS.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hours  16"), "unexpected output: {stdout}");
    assert!(stdout.contains("06:00 - 14:00 (Kasse 1)"));
}

#[test]
fn test_day_lookup() {
    let home = TempDir::new().unwrap();
    let records = records_file();
    let path = records.path().to_str().unwrap();

    let output = shiftcal(&home, &["day", "--records", path, "--date", "2025-01-08", "--json"]);
    let event = stdout_json(&output);
    assert_eq!(event["id"], "c");
    assert_eq!(event["backgroundColor"], "#b9e0ab");

    let output = shiftcal(&home, &["day", "--records", path, "--date", "2025-01-09"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "No entry on 2025-01-09."
    );
}

#[test]
fn test_config_file_overrides_palette() {
    let home = TempDir::new().unwrap();
    let records = records_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        r##"
[[theme_colors]]
id = 0
value = "#123456"
label = "6-14"
isActive = true
"##
    )
    .unwrap();
    config.flush().unwrap();

    let output = shiftcal(
        &home,
        &[
            "--config",
            config.path().to_str().unwrap(),
            "summary",
            "--records",
            records.path().to_str().unwrap(),
            "--month",
            "2025-01",
            "--json",
        ],
    );
    let result = stdout_json(&output);

    assert_eq!(result["mergedEvents"][0]["backgroundColor"], "#123456");
    // Frei (id 2) is not in the custom palette any more.
    assert_eq!(result["mergedEvents"][1]["backgroundColor"], "#FFFFFF");
}

#[test]
fn test_invalid_palette_is_rejected() {
    let home = TempDir::new().unwrap();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        r##"
[[theme_colors]]
id = 1
value = "#000000"
label = "a"

[[theme_colors]]
id = 1
value = "#111111"
label = "b"
"##
    )
    .unwrap();
    config.flush().unwrap();

    let output = shiftcal(&home, &["--config", config.path().to_str().unwrap(), "colors"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load configuration"));
}

#[test]
fn test_colors_all_includes_inactive() {
    let home = TempDir::new().unwrap();

    let output = shiftcal(&home, &["colors", "--all"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.lines().next().unwrap().contains("BLUE  (inactive)"));

    let output = shiftcal(&home, &["colors"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 4);
}

#[test]
fn test_bad_month_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let records = records_file();

    let output = shiftcal(
        &home,
        &["summary", "--records", records.path().to_str().unwrap(), "--month", "2025-13"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid month"));
}
