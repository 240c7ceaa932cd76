//! End-to-end tests for the `mdblocks` binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "## Title\n**bold** text\n* a\n* b\n\n|A|B|\n|---|---|\n|1|**2**|\n";

fn mdblocks() -> Command {
    Command::cargo_bin("mdblocks").unwrap()
}

#[test]
fn test_parse_summary_from_stdin() {
    mdblocks()
        .arg("parse")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 4"))
        .stdout(predicate::str::contains("[1] Heading (level 2)"))
        .stdout(predicate::str::contains("[3] List (Unordered, 2 items)"))
        .stdout(predicate::str::contains("[4] Table (2 columns, 1 rows)"));
}

#[test]
fn test_parse_full_shows_contents() {
    mdblocks()
        .args(["parse", "--full", "-"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("BOLD text"))
        .stdout(predicate::str::contains("Header: A | B"));
}

#[test]
fn test_parse_json() {
    let output = mdblocks()
        .args(["parse", "--json"])
        .write_stdin(SAMPLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);

    assert_eq!(blocks[0]["type"], "Heading");
    assert_eq!(blocks[0]["level"], 2);
    assert_eq!(blocks[0]["text"], "Title");

    assert_eq!(blocks[1]["type"], "Paragraph");
    assert_eq!(blocks[1]["content"][0]["type"], "Strong");
    assert_eq!(blocks[1]["content"][0]["content"], "bold");
    assert_eq!(blocks[1]["content"][1]["content"], " text");

    assert_eq!(blocks[2]["type"], "List");
    assert_eq!(blocks[2]["ordered"], false);

    assert_eq!(blocks[3]["type"], "Table");
    assert_eq!(blocks[3]["header"], serde_json::json!(["A", "B"]));
    assert_eq!(blocks[3]["rows"][0][1][0]["type"], "Strong");
}

#[test]
fn test_render_html_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"## Hi\n* <b>x</b>\n").unwrap();

    mdblocks()
        .arg("render")
        .arg(file.path())
        .assert()
        .success()
        .stdout("<h2>Hi</h2>\n<ul><li>&lt;b&gt;x&lt;/b&gt;</li></ul>\n");
}

#[test]
fn test_stats() {
    mdblocks()
        .arg("stats")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Headings:       1"))
        .stdout(predicate::str::contains("List items:     2"))
        .stdout(predicate::str::contains("Table rows:     1"))
        .stdout(predicate::str::contains("Emphasized:     2"));
}

#[test]
fn test_single_pipe_line_gives_no_blocks() {
    mdblocks()
        .arg("parse")
        .write_stdin("|only one row|")
        .assert()
        .success()
        .stdout("Blocks: 0\n");
}

#[test]
fn test_missing_file_fails() {
    mdblocks()
        .args(["parse", "/definitely/not/here.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_json_and_full_conflict() {
    mdblocks()
        .args(["parse", "--json", "--full"])
        .write_stdin(SAMPLE)
        .assert()
        .failure();
}
