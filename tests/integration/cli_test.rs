//! Integration tests for the termspan CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, termspan};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (mut cmd, _config) = termspan();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("css"))
        .stdout(predicate::str::contains("config"));
}

#[test]
#[cfg(not(feature = "release"))]
fn long_version_includes_build_date_and_git_sha() {
    let (mut cmd, _config) = termspan();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "termspan {} (",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains(", git "));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let (mut cmd, _config) = termspan();
    cmd.arg("frobnicate").assert().code(2);
}

// ============================================================================
// Convert Tests
// ============================================================================

#[test]
fn convert_reads_stdin() {
    let (mut cmd, _config) = termspan();
    cmd.arg("convert")
        .write_stdin("\x1b[1mBold\x1b[0m")
        .assert()
        .success()
        .stdout("<span class=\"bold\" style=\"\">Bold</span>");
}

#[test]
fn convert_dash_means_stdin() {
    let (mut cmd, _config) = termspan();
    cmd.args(["convert", "-"])
        .write_stdin(" ")
        .assert()
        .success()
        .stdout("&nbsp;");
}

#[test]
fn convert_reads_file_and_writes_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.html");
    let input = fixtures_dir().join("redraw.log");

    let (mut cmd, _config) = termspan();
    cmd.arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(
        html,
        "<span class=\"bold\" style=\"background-color: blue\"> status </span>done"
    );
}

#[test]
fn convert_missing_file_fails() {
    let (mut cmd, _config) = termspan();
    cmd.args(["convert", "/nonexistent/input.log"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn convert_tolerates_invalid_utf8() {
    let (mut cmd, _config) = termspan();
    cmd.arg("convert")
        .write_stdin(vec![b'a', 0xff, b'b'])
        .assert()
        .success()
        .stdout("a\u{fffd}b");
}

#[test]
fn convert_document_flag_wraps_page() {
    let (mut cmd, _config) = termspan();
    cmd.args(["convert", "--document", "--title", "CI <log>"])
        .write_stdin("\x1b[32mok")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>CI &lt;log&gt;</title>"))
        .stdout(predicate::str::contains(".terminal .bold {"))
        .stdout(predicate::str::contains(
            "<div class=\"terminal\"><span class=\"\" style=\"color: green\">ok</span></div>",
        ));
}

#[test]
fn convert_document_without_stylesheet() {
    let (mut cmd, _config) = termspan();
    cmd.args(["convert", "--document", "--no-stylesheet"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("<style>").not());
}

#[test]
fn convert_honours_config_file() {
    let (mut cmd, config) = termspan();
    fs::write(
        config.path().join("config.toml"),
        "[document]\nenabled = true\ntitle = \"from config\"\n",
    )
    .unwrap();

    cmd.arg("convert")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>from config</title>"));
}

#[test]
fn convert_rejects_invalid_config() {
    let (mut cmd, config) = termspan();
    fs::write(config.path().join("config.toml"), "[document\n").unwrap();

    cmd.arg("convert")
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}

// ============================================================================
// Logging Tests
// ============================================================================

#[test]
fn convert_is_quiet_by_default() {
    let (mut cmd, _config) = termspan();
    cmd.arg("convert")
        .write_stdin("\x1b[2Jx")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn debug_verbosity_logs_conversion_summary() {
    let (mut cmd, _config) = termspan();
    cmd.args(["-vv", "convert"])
        .write_stdin("\x1b[1mx\x1b[2J")
        .assert()
        .success()
        .stdout("<span class=\"bold\" style=\"\">x</span>")
        .stderr(predicate::str::contains("converted terminal output to html"))
        .stderr(predicate::str::contains("dropping control sequence").not());
}

#[test]
fn trace_verbosity_logs_dropped_sequences() {
    let (mut cmd, _config) = termspan();
    cmd.args(["-vvv", "convert"])
        .write_stdin("\x1b[2Jx\x1b[?25l")
        .assert()
        .success()
        .stdout("x")
        .stderr(predicate::str::contains("dropping control sequence"))
        .stderr(predicate::str::contains("Erase"))
        .stderr(predicate::str::contains("dropping unrecognized escape sequence"));
}

// ============================================================================
// Css and Config Tests
// ============================================================================

#[test]
fn css_prints_class_rules() {
    let (mut cmd, _config) = termspan();
    cmd.arg("css")
        .assert()
        .success()
        .stdout(predicate::str::contains(".bold {"))
        .stdout(predicate::str::contains(".invisible {"));
}

#[test]
fn css_scope_prefixes_rules() {
    let (mut cmd, _config) = termspan();
    cmd.args(["css", "--scope", "#out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#out .underline {"));
}

#[test]
fn config_show_prints_defaults() {
    let (mut cmd, _config) = termspan();
    cmd.args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[document]"))
        .stdout(predicate::str::contains("enabled = false"));
}

#[test]
fn config_path_uses_env_override() {
    let (mut cmd, config) = termspan();
    let expected = config.path().join("config.toml");
    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().into_owned()));
}
