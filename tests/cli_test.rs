use assert_cmd::cargo;
use chrono::{Duration, Local};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command pointed at a private config file with colours disabled
fn days_until(config_path: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("days_until");
    cmd.env("DAYS_UNTIL_CONFIG", config_path)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

fn write_entry(config_path: &Path, id: &str, event: &str, start: &str, end: &str) {
    let mut content = fs::read_to_string(config_path).unwrap_or_default();
    content.push_str(&format!(
        "[{id}]\nevent = \"{event}\"\n\n[{id}.dates]\nstart = \"{start}\"\nend = \"{end}\"\n\n"
    ));
    fs::write(config_path, content).unwrap();
}

fn iso(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");

    days_until(&config_path)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("days_until v"));

    assert!(!config_path.exists());
}

#[test]
fn test_config_path_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("conf/days_until.toml");

    days_until(&config_path)
        .arg("--config")
        .assert()
        .success()
        .stdout(predicate::str::contains(config_path.to_str().unwrap()));

    assert!(config_path.exists());
}

#[test]
fn test_list_empty_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");

    days_until(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created config at"))
        .stderr(predicate::str::contains("No data in config"));
}

#[test]
fn test_list_malformed_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    fs::write(&config_path, "[oops\nevent = 3").unwrap();

    days_until(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config was unparsable"));
}

#[test]
fn test_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    let today = Local::now().date_naive();
    let end = today + Duration::days(40);

    days_until(&config_path)
        .arg("--add")
        .write_stdin(format!("Road trip\n\n{}\n", iso(end)))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Road trip\""));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("event = \"Road trip\""));
    assert!(content.contains(&format!("start = \"{}\"", iso(today))));
    assert!(content.contains(&format!("end = \"{}\"", iso(end))));

    days_until(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Road trip #"))
        .stdout(predicate::str::contains("Days Passed:         0"))
        .stdout(predicate::str::contains("Days Remaining:      40"))
        .stdout(predicate::str::contains("0.0%"));
}

#[test]
fn test_list_compress() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    let today = Local::now().date_naive();
    write_entry(
        &config_path,
        "a1",
        "Lease",
        &iso(today - Duration::days(10)),
        &iso(today + Duration::days(10)),
    );

    days_until(&config_path)
        .arg("--compress")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nDays Passed:         10\n"))
        .stdout(predicate::str::contains("Days Remaining:      10!\n▓"));
}

#[test]
fn test_list_reports_backwards_entry() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    let today = Local::now().date_naive();
    write_entry(
        &config_path,
        "a1",
        "Backwards",
        &iso(today - Duration::days(1)),
        &iso(today - Duration::days(30)),
    );
    write_entry(
        &config_path,
        "b2",
        "Finished",
        &iso(today - Duration::days(30)),
        &iso(today - Duration::days(1)),
    );

    days_until(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: Start date after end date."))
        .stdout(predicate::str::contains("COMPLETE"));
}

#[test]
fn test_clean_removes_expired_only() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    let today = Local::now().date_naive();
    write_entry(
        &config_path,
        "old",
        "Yesterday",
        &iso(today - Duration::days(20)),
        &iso(today - Duration::days(1)),
    );
    write_entry(
        &config_path,
        "new",
        "Next year",
        &iso(today),
        &iso(today + Duration::days(365)),
    );

    days_until(&config_path)
        .arg("--clean")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Yesterday"))
        .stdout(predicate::str::contains("Removed 1 event(s)."));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(!content.contains("Yesterday"));
    assert!(content.contains("Next year"));
}

#[test]
fn test_remove_answering_no_keeps_everything() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    write_entry(&config_path, "a1", "First", "2024-01-01", "2030-01-01");
    write_entry(&config_path, "b2", "Second", "2024-01-01", "2031-01-01");
    let before = fs::read_to_string(&config_path).unwrap();

    days_until(&config_path)
        .arg("--remove")
        .write_stdin("n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing marked for removal."));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), before);
}

#[test]
fn test_remove_confirmed() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    write_entry(&config_path, "a1", "First", "2024-01-01", "2030-01-01");
    write_entry(&config_path, "b2", "Second", "2024-01-01", "2031-01-01");

    days_until(&config_path)
        .arg("--remove")
        .write_stdin("n\ny\ny\n")
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("First"));
    assert!(!content.contains("Second"));
}

#[test]
fn test_error_line_is_plain_when_piped() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    fs::write(&config_path, "").unwrap();

    cargo::cargo_bin_cmd!("days_until")
        .env("DAYS_UNTIL_CONFIG", &config_path)
        .env_remove("NO_COLOR")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("CLICOLOR")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: No data in config"))
        .stderr(predicate::str::contains("\u{1b}").not());
}

#[test]
fn test_unknown_key_is_reported_and_file_kept() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("days_until.toml");
    let content = r#"[a]
event = "Trip"
note = "keep me"

[a.dates]
start = "2026-01-01"
end = "2026-02-01"
"#;
    fs::write(&config_path, content).unwrap();

    days_until(&config_path)
        .arg("--clean")
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config was unparsable"));

    assert_eq!(fs::read_to_string(&config_path).unwrap(), content);
}
