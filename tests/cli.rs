#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Runs inside an empty directory so no bracket.toml is picked up.
fn bracket(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bracket").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BRACKET_SUPPRESS")
        .env_remove("BRACKET_CONFIG")
        .env("BRACKET_DATABASE", dir.path().join("books.db"));
    cmd
}

#[test]
fn guard_propagates_kind_outside_policy() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .args(["guard", "--suppress", "index,key", "--raise", "value"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("enter\nexit\n"))
        .stdout(predicate::str::contains("propagated: value error"));
}

#[test]
fn guard_suppresses_kind_in_policy() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .args(["guard", "--suppress", "index,key", "--raise", "key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enter\nexit\nsuppressed"));
}

#[test]
fn guard_without_error_completes() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .arg("guard")
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));
}

#[test]
fn guard_rejects_numeric_policy() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .args(["guard", "--suppress", "42", "--raise", "value"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("enter").not())
        .stderr(predicate::str::contains("Invalid suppression policy"));
}

#[test]
fn guard_policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bracket.toml"), "suppress = \"ValueError\"\n").unwrap();
    bracket(&dir)
        .args(["guard", "--raise", "value"])
        .assert()
        .success()
        .stdout(predicate::str::contains("suppressed"));
}

#[test]
fn demo_walks_through_the_scenarios() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> completed"))
        .stdout(predicate::str::contains(
            "policy all, raising generic error: anything\nenter\nexit\n-> suppressed",
        ))
        .stdout(predicate::str::contains(
            "raising key error: missing key\nenter\nexit\n-> suppressed",
        ))
        .stdout(predicate::str::contains(
            "policy {index, key}, raising value error: bad value\nenter\nexit\n-> propagated",
        ));
}

#[test]
fn fuel_prints_both_parts() {
    let dir = TempDir::new().unwrap();
    let masses = dir.path().join("masses.txt");
    fs::write(&masses, "12\n14\n1969\n100756\n").unwrap();
    bracket(&dir)
        .arg("fuel")
        .arg(&masses)
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 1 pt 1 34241\nDay 1 pt 2 51316\n"));
}

#[test]
fn fuel_overflow_is_an_error() {
    let dir = TempDir::new().unwrap();
    let masses = dir.path().join("masses.txt");
    fs::write(&masses, "9223372036854775807\n".repeat(4)).unwrap();
    bracket(&dir)
        .arg("fuel")
        .arg(&masses)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Overflow"));
}

#[test]
fn books_add_then_list() {
    let dir = TempDir::new().unwrap();
    bracket(&dir)
        .args(["books", "add", "Dune", "Frank Herbert", "1965", "Chilton Books"])
        .assert()
        .success();
    bracket(&dir)
        .args(["books", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book(title='Dune', author='Frank Herbert', year='1965', publisher='Chilton Books')",
        ));
    bracket(&dir)
        .args(["books", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"publisher\": \"Chilton Books\""));
}
