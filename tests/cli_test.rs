//! Integration tests for the CLI surface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn outfitter() -> Command {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    // Keep host probing fast: unavailable managers resolve instantly, and
    // any that are present answer their version command well within this.
    cmd.args(["--timeout", "5"]);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("External CLI tool dependency"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_unknown_tool_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "definitely-not-a-real-tool"]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("definitely-not-a-real-tool"));
    Ok(())
}

#[test]
fn check_present_tool_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    // `sh` exists on any unix test host; a user registry entry makes it a
    // known tool.
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("extra.yml");
    fs::write(&registry, "shell:\n  command_names: [sh]\n").unwrap();

    let mut cmd = outfitter();
    cmd.args(["check", "shell", "--registry"]).arg(&registry);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("shell"));
    Ok(())
}

#[test]
fn check_json_emits_parseable_reports() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "definitely-not-a-real-tool", "--json"]);
    let output = cmd.assert().failure().get_output().stdout.clone();
    let reports: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(reports[0]["tool"], "definitely-not-a-real-tool");
    assert_eq!(reports[0]["outcome"], "unknown_tool");
    Ok(())
}

#[test]
fn check_unmatched_tag_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["check", "--tag", "no-such-tag"]);
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("matches"));
    Ok(())
}

#[test]
fn install_json_emits_only_parseable_reports() -> Result<(), Box<dyn std::error::Error>> {
    // The whole stdout stream must be one JSON document, with no plan
    // preview or progress lines mixed in.
    let mut cmd = outfitter();
    cmd.args(["install", "definitely-not-a-real-tool", "--json", "--yes"]);
    let output = cmd.assert().failure().get_output().stdout.clone();
    let reports: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(reports[0]["outcome"], "unknown_tool");
    Ok(())
}

#[test]
fn check_rejects_malformed_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("broken.yml");
    fs::write(&registry, "ripgrep: [not, a, record]\n").unwrap();

    let mut cmd = outfitter();
    cmd.args(["check", "--registry"]).arg(&registry);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load registry"));
    Ok(())
}

#[test]
fn install_dry_run_prints_plan_without_installing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["install", "ripgrep", "--dry-run"]);
    cmd.assert().success();
    Ok(())
}

#[test]
fn info_shows_registry_entry() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["info", "ripgrep"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rg"));
    Ok(())
}

#[test]
fn info_unknown_tool_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["info", "definitely-not-a-real-tool"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool"));
    Ok(())
}

#[test]
fn managers_json_reports_platform() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = outfitter();
    cmd.args(["managers", "--json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(value["platform"].is_string());
    assert!(value["available"].is_array());
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("outfitter"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("outfitter"));
    Ok(())
}
