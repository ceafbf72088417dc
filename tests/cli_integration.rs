//! Integration tests for the pman CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passphrases are supplied through `PMAN_PASSWORD` and friends, and the
//! credential password is piped on stdin, so nothing prompts.

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command pointing at the pman binary with a clean environment.
fn pman(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pman").expect("binary should exist");
    cmd.env_remove("PMAN_VAULT")
        .env_remove("PMAN_PASSWORD")
        .env_remove("PMAN_NEW_PASSWORD")
        .env_remove("PMAN_SOURCE_PASSWORD")
        .env_remove("PMAN_LOG")
        .env("PMAN_CONFIG", home.path().join("config.toml"))
        .env("HOME", home.path());
    cmd
}

/// Helper: create a vault through the CLI and return its path.
fn init_vault(home: &TempDir, name: &str, password: &str) -> std::path::PathBuf {
    let path = home.path().join(name);
    pman(home)
        .args(["init", path.to_str().unwrap()])
        .env("PMAN_PASSWORD", password)
        .assert()
        .success()
        .stdout(predicate::str::contains("export PMAN_VAULT="));
    path
}

#[test]
fn help_flag_shows_usage() {
    let home = TempDir::new().unwrap();
    pman(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted single-file credential store"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("rekey"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn no_args_shows_help() {
    let home = TempDir::new().unwrap();
    pman(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn list_without_vault_path_fails() {
    let home = TempDir::new().unwrap();
    pman(&home)
        .arg("list")
        .env("PMAN_PASSWORD", "whatever-pass")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PMAN_VAULT"));
}

#[test]
fn init_rejects_short_passphrase() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("v.vault");
    pman(&home)
        .args(["init", path.to_str().unwrap()])
        .env("PMAN_PASSWORD", "short")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 8"));
    assert!(!path.exists());
}

#[test]
fn init_refuses_existing_file() {
    let home = TempDir::new().unwrap();
    let path = init_vault(&home, "v.vault", "correct-horse");
    pman(&home)
        .args(["init", path.to_str().unwrap()])
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn set_get_search_remove_flow() {
    let home = TempDir::new().unwrap();
    let path = init_vault(&home, "v.vault", "correct-horse");

    pman(&home)
        .args(["set", "github", "-u", "octocat", "-d", "code", "-f", "pin=77"])
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 'github'"));

    pman(&home)
        .args(["get", "github"])
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("hunter2"))
        .stdout(predicate::str::contains("pin"));

    pman(&home)
        .args(["search", "HUB"])
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .success()
        .stdout(predicate::str::contains("github"))
        .stdout(predicate::str::contains("hunter2").not());

    pman(&home)
        .args(["remove", "github", "--force"])
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .success();

    pman(&home)
        .args(["get", "github"])
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn wrong_passphrase_is_reported_without_details() {
    let home = TempDir::new().unwrap();
    let path = init_vault(&home, "v.vault", "correct-horse");

    pman(&home)
        .arg("list")
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "battery-staple")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong passphrase or corrupted vault"));
}

#[test]
fn rekey_changes_passphrase() {
    let home = TempDir::new().unwrap();
    let path = init_vault(&home, "v.vault", "correct-horse");

    pman(&home)
        .arg("rekey")
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .env("PMAN_NEW_PASSWORD", "battery-staple")
        .assert()
        .success();

    pman(&home)
        .arg("list")
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .failure();

    pman(&home)
        .arg("list")
        .env("PMAN_VAULT", &path)
        .env("PMAN_PASSWORD", "battery-staple")
        .assert()
        .success();
}

#[test]
fn merge_pulls_missing_entries() {
    let home = TempDir::new().unwrap();
    let ours = init_vault(&home, "ours.vault", "correct-horse");
    let theirs = init_vault(&home, "theirs.vault", "battery-staple");

    pman(&home)
        .args(["set", "bank", "-u", "kyle", "-d", "savings"])
        .env("PMAN_VAULT", &theirs)
        .env("PMAN_PASSWORD", "battery-staple")
        .write_stdin("1234\n")
        .assert()
        .success();

    pman(&home)
        .args(["merge", theirs.to_str().unwrap()])
        .env("PMAN_VAULT", &ours)
        .env("PMAN_PASSWORD", "correct-horse")
        .env("PMAN_SOURCE_PASSWORD", "battery-staple")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("bank"));

    pman(&home)
        .args(["get", "bank"])
        .env("PMAN_VAULT", &ours)
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .success()
        .stdout(predicate::str::contains("1234"));
}

#[test]
fn vault_path_from_config_file() {
    let home = TempDir::new().unwrap();
    let path = init_vault(&home, "v.vault", "correct-horse");
    std::fs::write(
        home.path().join("config.toml"),
        format!("vault = {:?}\n", path.to_str().unwrap()),
    )
    .unwrap();

    pman(&home)
        .arg("list")
        .env("PMAN_PASSWORD", "correct-horse")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 credential(s)"));
}
