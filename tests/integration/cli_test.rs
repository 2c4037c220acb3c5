//! Integration tests for the `pacer` CLI.

use predicates::prelude::*;

use super::helpers::{fixture, TestEnv};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rate"))
        .stdout(predicate::str::contains("seek"))
        .stdout(predicate::str::contains("play"));
}

#[test]
fn play_help_lists_keys() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alt+Left"))
        .stdout(predicate::str::contains("--duration"));
}

// ============================================================================
// Rate Tests
// ============================================================================

#[test]
fn rate_defaults_to_one() {
    let env = TestEnv::new();
    env.cmd().arg("rate").assert().success().stdout("1.00x\n");
}

#[test]
fn rate_up_persists_between_runs() {
    let env = TestEnv::new();
    env.cmd().args(["rate", "up"]).assert().success().stdout("1.05x\n");
    env.cmd().args(["rate", "up"]).assert().success().stdout("1.10x\n");
    env.cmd().args(["rate", "show"]).assert().success().stdout("1.10x\n");

    let contents = env.store_contents().expect("store should be written");
    assert!(contents.contains("pacer.playback_rate"));
    assert!(contents.contains("1.1"));
}

#[test]
fn rate_down_stops_at_min() {
    let env = TestEnv::new();
    env.cmd().args(["rate", "down"]).assert().success().stdout("1.00x\n");
}

#[test]
fn rate_reset_goes_to_default() {
    let env = TestEnv::new();
    env.cmd().args(["rate", "up"]).assert().success();
    env.cmd().args(["rate", "reset"]).assert().success().stdout("1.00x\n");
}

#[test]
fn rate_uses_configured_key_and_step() {
    let env = TestEnv::with_config("[rate]\nstep = 0.25\n");
    env.cmd().args(["rate", "up"]).assert().success().stdout("1.25x\n");
}

#[test]
fn invalid_config_fails() {
    let env = TestEnv::with_config("[rate]\nmin = 3.0\nmax = 2.0\n");
    env.cmd()
        .arg("rate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn default_rate_outside_bounds_is_reported_once() {
    let env = TestEnv::with_config("[rate]\ndefault = 5.0\n");
    env.cmd()
        .args(["rate", "reset"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file").count(1))
        .stderr(predicate::str::contains("rate.default (5)"));
    assert_eq!(env.store_contents(), None);
}

// ============================================================================
// Seek Tests
// ============================================================================

#[test]
fn seek_prev_restarts_chapter() {
    let env = TestEnv::new();
    env.cmd()
        .args(["seek", "prev", "--at", "65", "--chapters"])
        .arg(fixture("chapters.txt"))
        .assert()
        .success()
        .stdout("60\t1:00\n");
}

#[test]
fn seek_prev_snaps_back() {
    let env = TestEnv::new();
    env.cmd()
        .args(["seek", "prev", "--at", "1:02", "--chapters"])
        .arg(fixture("chapters.json"))
        .assert()
        .success()
        .stdout("10\t0:10\n");
}

#[test]
fn seek_prev_near_start_goes_to_zero() {
    let env = TestEnv::new();
    env.cmd()
        .args(["seek", "prev", "--at", "3", "--chapters"])
        .arg(fixture("chapters.txt"))
        .assert()
        .success()
        .stdout("0\t0:00\n");
}

#[test]
fn seek_next() {
    let env = TestEnv::new();
    env.cmd()
        .args(["seek", "next", "--at", "15", "--chapters"])
        .arg(fixture("chapters.txt"))
        .assert()
        .success()
        .stdout("60\t1:00\n");
}

#[test]
fn seek_honors_configured_snap_back() {
    let env = TestEnv::with_config("[chapters]\nsnap_back_secs = 1.0\n");
    env.cmd()
        .args(["seek", "prev", "--at", "62", "--chapters"])
        .arg(fixture("chapters.txt"))
        .assert()
        .success()
        .stdout("60\t1:00\n");
}

#[test]
fn seek_with_empty_chapter_file_fails() {
    let env = TestEnv::new();
    let empty = env.dir.path().join("empty.txt");
    std::fs::write(&empty, "# nothing here\n").unwrap();

    env.cmd()
        .args(["seek", "next", "--at", "15", "--chapters"])
        .arg(&empty)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No chapters"));
}

#[test]
fn seek_rejects_bad_time() {
    let env = TestEnv::new();
    env.cmd()
        .args(["seek", "next", "--at", "soon", "--chapters"])
        .arg(fixture("chapters.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is not a time"));
}

// ============================================================================
// Chapters / Config / Completions
// ============================================================================

#[test]
fn chapters_lists_fixture() {
    let env = TestEnv::new();
    env.cmd()
        .arg("chapters")
        .arg(fixture("chapters.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("0:10  Intro"))
        .stdout(predicate::str::contains("3:00  Deep dive"));
}

#[test]
fn chapters_reports_bad_file() {
    let env = TestEnv::new();
    env.cmd()
        .arg("chapters")
        .arg(fixture("unsorted.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not after the previous chapter"));
}

#[test]
fn config_path_uses_env_override() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_sections() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[rate]"))
        .stdout(predicate::str::contains("snap_back_secs"));
}

#[test]
fn completions_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pacer"));
}

#[test]
fn play_refuses_without_terminal() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--duration", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interactive terminal"));
}
