//! CLI end-to-end tests for the `ftpat` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn ftpat_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ftpat"))
}

fn script_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("failed to write temp file");
    file
}

#[test]
fn help_flag_prints_usage() {
    let mut cmd = ftpat_bin();
    cmd.arg("--help");

    cmd.assert().success().stdout(predicate::str::contains("ftpat"));
}

#[test]
fn scans_a_script_and_emits_a_json_report_per_rule() {
    let file = script_file("autocmd BufNewFile,BufRead *.rs call Setup()\n");

    let mut cmd = ftpat_bin();
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"*.rs\""))
        .stdout(predicate::str::contains("\"lnum\""));
}

#[test]
fn raw_pattern_mode_skips_the_scanner() {
    let file = script_file("a{b,c}\n");

    let mut cmd = ftpat_bin();
    cmd.arg("-pu").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"ab\""))
        .stdout(predicate::str::contains("\"ac\""))
        .stdout(predicate::str::contains("\"lnum\"").not());
}

#[test]
fn no_json_flag_renders_plain_text() {
    let file = script_file("a{b,c}\n");

    let mut cmd = ftpat_bin();
    cmd.arg("-pud").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a{b,c}"))
        .stdout(predicate::str::contains("\"pattern\"").not());
}

#[test]
fn a_malformed_pattern_is_reported_per_pattern_without_aborting_the_run() {
    let file = script_file("[\nb\n");

    let mut cmd = ftpat_bin();
    cmd.arg("-p").arg(file.path());

    cmd.assert().success().stdout(predicate::str::contains("\"error\""));
}
