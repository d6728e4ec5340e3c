//! CLI integration tests for the `compdir` binary.
//!
//! Uses `assert_cmd` to spawn the binary and verify exit codes, stdout
//! content, and stderr content. Database-touching tests point at a port
//! nothing listens on, so the connect is refused immediately and the
//! fatal-connect contract (halt before any output) can be checked without
//! a running MySQL server.

use std::io::Write;
use std::time::Duration;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn compdir() -> Command {
    let mut cmd = cargo_bin_cmd!("compdir");
    cmd.timeout(Duration::from_secs(30));
    cmd
}

/// Write a config file pointing at 127.0.0.1:1 — a port with no listener,
/// so connecting fails fast with a refused connection.
fn unreachable_db_config() -> NamedTempFile {
    let toml_content = r#"
[database]
host = "127.0.0.1"
port = 1
user = "root"
database = "compdb"
connect_timeout_secs = 5
query_timeout_secs = 5

[server]
port = 0
"#;
    let tmp = NamedTempFile::new().expect("temp file");
    tmp.as_file()
        .write_all(toml_content.as_bytes())
        .expect("write config");
    tmp
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    compdir()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Company directory page service"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_exits_0() {
    compdir()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("compdir"));
}

// ──────────────────────────────────────────────
// 2. Config subcommand
// ──────────────────────────────────────────────

#[test]
fn config_init_prints_skeleton() {
    compdir()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[database]"))
        .stdout(predicate::str::contains("[server]"))
        .stdout(predicate::str::contains("COMPDIR_DB_PASSWORD"));
}

// ──────────────────────────────────────────────
// 3. Fatal failure paths (no database required)
// ──────────────────────────────────────────────

#[test]
fn render_fails_on_missing_config_file() {
    compdir()
        .args(["render", "--config", "/nonexistent/compdir.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read config"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_fails_on_invalid_config_file() {
    let tmp = NamedTempFile::new().expect("temp file");
    tmp.as_file()
        .write_all(b"not valid toml [")
        .expect("write config");

    compdir()
        .args(["render", "--config"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read config"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_halts_on_unreachable_database_with_no_output() {
    let config = unreachable_db_config();

    compdir()
        .args(["render", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("connection"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn serve_refuses_to_start_when_database_unreachable() {
    let config = unreachable_db_config();

    compdir()
        .args(["serve", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("connection"));
}
