//! Integration tests for the keystash CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The enrollment dialog needs a real terminal, so interactive flows
//! are covered by the library-level enrollment tests; here we focus on
//! the non-interactive commands and structural checks.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the keystash binary.
fn keystash() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("keystash").expect("binary should exist")
}

/// Helper: the --store-dir argument for a scratch store.
fn store_dir_arg(tmp: &TempDir) -> String {
    tmp.path().join(".keystash").display().to_string()
}

#[test]
fn help_flag_shows_usage() {
    keystash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted local API credential store"))
        .stdout(predicate::str::contains("enroll"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn version_flag_shows_version() {
    keystash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keystash"));
}

#[test]
fn no_args_shows_help() {
    keystash()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn set_from_stdin_then_get_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    keystash()
        .args(["get", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("AIzaSyExampleKeyData"));
}

#[test]
fn get_unknown_provider_fails_with_not_found() {
    let tmp = TempDir::new().unwrap();

    keystash()
        .args(["get", "google", "--store-dir", &store_dir_arg(&tmp)])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No credential stored"));
}

#[test]
fn delete_force_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    keystash()
        .args(["delete", "google", "--force", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .success();

    // Deleting again still exits zero.
    keystash()
        .args(["delete", "google", "--force", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn list_shows_stored_providers() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    keystash()
        .args(["list", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("google"))
        // The secret itself must never be printed.
        .stdout(predicate::str::contains("AIzaSyExampleKeyData").not());
}

#[test]
fn list_on_empty_store_hints_at_enroll() {
    let tmp = TempDir::new().unwrap();

    keystash()
        .args(["list", "--store-dir", &store_dir_arg(&tmp)])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No credentials stored yet"));
}

#[test]
fn invalid_provider_name_is_rejected() {
    let tmp = TempDir::new().unwrap();

    keystash()
        .args(["set", "bad/name", "--store-dir", &store_dir_arg(&tmp)])
        .current_dir(tmp.path())
        .write_stdin("some-value-123\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn tampered_ciphertext_reports_unrecoverable() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    // Flip one ciphertext byte on disk.
    let cipher_path = tmp.path().join(".keystash").join("google.key");
    let mut blob = std::fs::read(&cipher_path).unwrap();
    blob[0] ^= 0x01;
    std::fs::write(&cipher_path, &blob).unwrap();

    keystash()
        .args(["get", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("enroll the credential again"));
}

#[test]
fn metadata_file_never_contains_the_secret() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    let meta_raw =
        std::fs::read_to_string(tmp.path().join(".keystash").join("google.meta.json")).unwrap();
    assert!(!meta_raw.contains("AIzaSyExampleKeyData"));
    assert!(meta_raw.contains("\"encrypted\": true"));
}

#[test]
fn status_reports_store_contents() {
    let tmp = TempDir::new().unwrap();
    let store_dir = store_dir_arg(&tmp);

    keystash()
        .args(["set", "google", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    keystash()
        .args(["status", "--store-dir", &store_dir])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Store directory"))
        .stdout(predicate::str::contains("Credentials:     1"));
}

#[test]
fn store_dir_from_config_file_is_used() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".keystash.toml"),
        "store_dir = \"custom-store\"\n",
    )
    .unwrap();

    keystash()
        .args(["set", "google"])
        .current_dir(tmp.path())
        .write_stdin("AIzaSyExampleKeyData\n")
        .assert()
        .success();

    assert!(tmp.path().join("custom-store").join("google.key").exists());
}
