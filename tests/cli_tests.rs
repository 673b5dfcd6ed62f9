//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn batch_scribe_bin() -> Command {
    Command::cargo_bin("batch-scribe").expect("binary builds")
}

#[test]
fn help_output() {
    batch_scribe_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("transcription")
                .and(predicate::str::contains("--audio-dir"))
                .and(predicate::str::contains("--output-dir"))
                .and(predicate::str::contains("--prompts-dir"))
                .and(predicate::str::contains("--model"))
                .and(predicate::str::contains("--no-menu")),
        );
}

#[test]
fn version_output() {
    batch_scribe_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("batch-scribe")
                .and(predicate::str::contains(env!("CARGO_PKG_VERSION"))),
        );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    batch_scribe_bin()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}

#[test]
fn config_path_command() {
    batch_scribe_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("batch-scribe").and(predicate::str::contains("config.toml")),
        );
}

#[test]
fn config_help() {
    batch_scribe_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "set", "audio_dir", "Recordings"])
        .assert()
        .success();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "get", "audio_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recordings"));
}

#[test]
fn config_get_masks_api_key() {
    let dir = tempfile::tempdir().unwrap();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "set", "api_key", "secret-key-9876"])
        .assert()
        .success();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("****9876")
                .and(predicate::str::contains("secret-key").not()),
        );
}

#[test]
fn config_get_masks_multibyte_api_key() {
    let dir = tempfile::tempdir().unwrap();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "set", "api_key", "aébcd"])
        .assert()
        .success();

    batch_scribe_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****ébcd"));
}

#[test]
fn missing_audio_dir_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();

    batch_scribe_bin()
        .current_dir(dir.path())
        .env("GEMINI_API_KEY", "dummy-key")
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .args(["--audio-dir", "DoesNotExist", "--no-menu"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("not found")
                .and(predicate::str::contains("Supported formats")),
        );
}

#[test]
fn empty_audio_dir_reports_no_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("Audio")).unwrap();

    batch_scribe_bin()
        .current_dir(dir.path())
        .env("GEMINI_API_KEY", "dummy-key")
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .arg("--no-menu")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("No supported audio files")
                .and(predicate::str::contains("mp3")),
        );
}
