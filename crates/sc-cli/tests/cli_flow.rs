//! End-to-end tests running the `sleepcalc` binary.
//!
//! Every test points `HOME` at a temp dir so a user config never leaks in.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn sleepcalc_binary() -> String {
    env!("CARGO_BIN_EXE_sleepcalc").to_string()
}

fn sleepcalc(home: &TempDir) -> Command {
    let mut cmd = Command::new(sleepcalc_binary());
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("SLEEPCALC_FALL_ASLEEP_MINUTES")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "sleepcalc should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_wake_prints_bedtimes() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home).args(["wake", "7:00", "AM"]).output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("Wake-up time: 7:00 AM\n"));
    let rows: Vec<&str> = stdout.lines().filter(|l| l.contains("cycles")).collect();
    assert_eq!(
        rows,
        vec![
            "  4 cycles  12:46 AM  (6h 14m)",
            "  5 cycles  11:16 PM  (7h 44m)",
            "  6 cycles   9:46 PM  (9h 14m)",
        ]
    );
}

#[test]
fn test_sleep_alias_prints_wake_times() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home).args(["sleep", "11pm"]).output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("Bedtime: 11:00 PM\n"));
    assert!(stdout.contains("  4 cycles   5:14 AM  (6h 14m)"));
    assert!(stdout.contains("  5 cycles   6:44 AM  (7h 44m)"));
    assert!(stdout.contains("  6 cycles   8:14 AM  (9h 14m)"));
}

#[test]
fn test_now_with_fixed_time_as_json() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home)
        .args(["now", "--at", "23:00", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(json["direction"], "wake_from_bedtime");
    assert_eq!(json["anchor"], "23:00");
    let times: Vec<&str> = json["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["time"].as_str().unwrap())
        .collect();
    assert_eq!(times, vec!["05:14", "06:44", "08:14"]);
}

#[test]
fn test_invalid_time_fails_with_input_in_message() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home).args(["bed", "25:00"]).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid time \"25:00\""), "stderr: {stderr}");
    assert!(stderr.contains("unrecognized time format"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_file_changes_buffer() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "fall_asleep_minutes = 0\n").unwrap();

    let output = sleepcalc(&home)
        .arg("--config")
        .arg(&config)
        .args(["bed", "22:00"])
        .output()
        .unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("  4 cycles   4:00 AM  (6h)"));
    assert!(stdout.contains("+0 min to fall asleep is already included."));
}

#[test]
fn test_default_config_location_is_read() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config/sleepcalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "fall_asleep_minutes = 30\n").unwrap();

    let output = sleepcalc(&home).arg("info").output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("It takes about 30 minutes to fall asleep"));
}

#[test]
fn test_env_overrides_config() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home)
        .env("SLEEPCALC_FALL_ASLEEP_MINUTES", "20")
        .args(["wake", "07:00", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();

    assert_eq!(json["fall_asleep_minutes"], 20);
    assert_eq!(json["candidates"][0]["time"], "00:40");
}

#[test]
fn test_out_of_range_buffer_is_rejected() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home)
        .env("SLEEPCALC_FALL_ASLEEP_MINUTES", "500")
        .args(["wake", "7am"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fall_asleep_minutes must be at most 120"), "stderr: {stderr}");
}

#[test]
fn test_calc_shows_both_tables() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home).args(["calc", "6:30", "am"]).output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Wake-up time: 6:30 AM"));
    assert!(stdout.contains("Bedtime: 6:30 AM"));
}

#[test]
fn test_chat_session_over_stdin() {
    let home = TempDir::new().unwrap();
    let mut child = sleepcalc(&home)
        .arg("chat")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"wake\nsoon\n7:00 AM\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("Welcome to the sleep calculator!"));
    assert!(stdout.contains("I couldn't understand \"soon\"."));
    assert!(stdout.contains("  6 cycles   9:46 PM  (9h 14m)"));
    assert!(stdout.ends_with("Good night!\n"));
}

#[test]
fn test_no_subcommand_prints_help() {
    let home = TempDir::new().unwrap();
    let output = sleepcalc(&home).output().unwrap();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("wake"));
}
