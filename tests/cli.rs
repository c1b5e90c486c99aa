use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".bloodbank").join("config.json")
}

const BINARY_NAME: &str = "bloodbank-dashboard";

#[test]
/// Help command should list every subcommand.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Live terminal dashboard for the blood bank"))
        .stdout(contains("start"))
        .stdout(contains("configure"))
        .stdout(contains("reset"));
}

#[test]
/// Configure should write the connection settings under $HOME.
fn configure_command_creates_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--api-url")
        .arg("http://bank.local:5000")
        .arg("--session-cookie")
        .arg("session=abc123")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("http://bank.local:5000"));
    assert!(saved.contains("session=abc123"));
}

#[test]
/// Configure should refuse a URL that is not http(s).
fn configure_rejects_invalid_url() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--api-url")
        .arg("not a url")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Start should fail fast on an invalid URL before touching the terminal.
fn start_rejects_invalid_url() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--api-url")
        .arg("ftp://bank.local")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
}

#[test]
/// Reset command should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing the saved dashboard configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}
