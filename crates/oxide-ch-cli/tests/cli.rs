use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn oxide_ch() -> Command {
    let mut cmd = Command::cargo_bin("oxide-ch").unwrap();
    cmd.env_remove("OXIDE_CH_CATALOG");
    cmd
}

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"keywords": ["SELECT", "FROM"], "aggregation_functions": ["count"]}}"#
    )
    .unwrap();
    file
}

#[test]
fn tokens_without_catalog() {
    oxide_ch()
        .arg("tokens")
        .write_stdin("x >= 1")
        .assert()
        .success()
        .stdout(predicate::str::contains("operator"))
        .stdout(predicate::str::contains("number"))
        .stdout(predicate::str::contains("\"1\""));
}

#[test]
fn tokens_with_catalog() {
    let catalog = catalog_file();
    oxide_ch()
        .arg("--catalog")
        .arg(catalog.path())
        .arg("tokens")
        .write_stdin("SELECT count(*) FROM t")
        .assert()
        .success()
        .stdout(predicate::str::contains("keyword"))
        .stdout(predicate::str::contains("function"))
        .stdout(predicate::str::contains("\"count\""));
}

#[test]
fn catalog_from_environment() {
    let catalog = catalog_file();
    oxide_ch()
        .env("OXIDE_CH_CATALOG", catalog.path())
        .args(["tokens", "--json"])
        .write_stdin("select")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category":"keyword""#));
}

#[test]
fn tokens_as_json_lines() {
    let output = oxide_ch()
        .args(["tokens", "--json"])
        .write_stdin("1 -- c")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["category"], "number");
    assert_eq!(lines[2]["category"], "comment");
    assert_eq!(lines[2]["span"]["start"], 2);
}

#[test]
fn tokens_from_file() {
    let mut query = NamedTempFile::new().unwrap();
    write!(query, "'abc'").unwrap();
    oxide_ch()
        .arg("tokens")
        .arg(query.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("string"));
}

#[test]
fn highlight_colors_keywords() {
    let catalog = catalog_file();
    oxide_ch()
        .arg("--catalog")
        .arg(catalog.path())
        .arg("highlight")
        .write_stdin("SELECT 1")
        .assert()
        .success()
        .stdout("\x1b[1;32mSELECT\x1b[0m \x1b[35m1\x1b[0m");
}

#[test]
fn unterminated_comment_warns() {
    oxide_ch()
        .arg("highlight")
        .write_stdin("/* open")
        .assert()
        .success()
        .stderr(predicate::str::contains("multiline-comments"));
}

#[test]
fn pretty_colors_borders_and_cells() {
    oxide_ch()
        .arg("pretty")
        .write_stdin("┌─x─┐")
        .assert()
        .success()
        .stdout("\x1b[90m┌─\x1b[0mx\x1b[90m─┐\x1b[0m");
}

#[test]
fn missing_catalog_fails() {
    oxide_ch()
        .args(["--catalog", "/nonexistent/catalog.json", "tokens"])
        .write_stdin("SELECT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read symbol catalog"));
}

#[test]
fn malformed_catalog_fails() {
    let mut catalog = NamedTempFile::new().unwrap();
    write!(catalog, r#"{{"keywordz": []}}"#).unwrap();
    oxide_ch()
        .arg("--catalog")
        .arg(catalog.path())
        .arg("tokens")
        .write_stdin("SELECT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol catalog"));
}
