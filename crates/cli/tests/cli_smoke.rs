//! CLI smoke tests for asciify.
//!
//! These tests run the built binary and check its stdout, stderr and
//! exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the asciify binary.
fn asciify_cmd() -> Command {
  cargo_bin_cmd!("asciify")
}

const NATIVE: &str = "123 test тест";
const ESCAPED: &str = "123 test \\u0442\\u0435\\u0441\\u0442";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  asciify_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  asciify_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("asciify"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["encode", "decode", "convert", "platform", "demo"] {
    asciify_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// encode / decode
// =============================================================================

#[test]
fn encode_argument() {
  asciify_cmd()
    .args(["encode", NATIVE])
    .assert()
    .success()
    .stdout(format!("{}\n", ESCAPED));
}

#[test]
fn encode_all_escapes_ascii() {
  asciify_cmd()
    .args(["encode", "--all", "ABC"])
    .assert()
    .success()
    .stdout("\\u0041\\u0042\\u0043\n");
}

#[test]
fn encode_stdin_keeps_trailing_newline() {
  asciify_cmd()
    .arg("encode")
    .write_stdin("тест\n")
    .assert()
    .success()
    .stdout("\\u0442\\u0435\\u0441\\u0442\n");
}

#[test]
fn decode_argument() {
  asciify_cmd()
    .args(["decode", ESCAPED])
    .assert()
    .success()
    .stdout(format!("{}\n", NATIVE));
}

#[test]
fn decode_stdin() {
  asciify_cmd()
    .arg("decode")
    .write_stdin("key=\\u0442\\u0435\\u0441\\u0442\nother=\\u12\n")
    .assert()
    .success()
    .stdout("key=тест\nother=\\u12\n");
}

#[test]
fn empty_stdin_prints_nothing() {
  asciify_cmd().arg("encode").write_stdin("").assert().success().stdout("");
}

// =============================================================================
// demo
// =============================================================================

#[test]
fn demo_prints_both_examples() {
  asciify_cmd()
    .arg("demo")
    .assert()
    .success()
    .stdout(format!("{}\n{}\n", ESCAPED, NATIVE));
}

// =============================================================================
// platform
// =============================================================================

#[test]
fn platform_shows_category() {
  asciify_cmd()
    .arg("platform")
    .assert()
    .success()
    .stdout(predicate::str::contains("Platform"));
}

#[test]
fn platform_honors_os_name_override() {
  asciify_cmd()
    .arg("platform")
    .env("ASCIIFY_OS_NAME", "Windows 10")
    .assert()
    .success()
    .stdout(predicate::str::contains("windows").and(predicate::str::contains("Windows 10")));

  asciify_cmd()
    .arg("platform")
    .env("ASCIIFY_OS_NAME", "Mac OS X")
    .assert()
    .success()
    .stdout(predicate::str::contains("mac"));
}

#[test]
fn platform_json_output() {
  let output = asciify_cmd()
    .args(["platform", "--json"])
    .env("ASCIIFY_OS_NAME", "Ubuntu Linux")
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["platform"], "linux");
  assert_eq!(json["os_name"], "Ubuntu Linux");
  assert_eq!(json["is_linux"], true);
  assert_eq!(json["is_windows"], false);
}

// =============================================================================
// convert
// =============================================================================

#[test]
fn convert_in_place_round_trip() {
  let temp = TempDir::new().unwrap();
  let file = temp.path().join("messages.properties");
  std::fs::write(&file, "title=Заголовок\n").unwrap();

  asciify_cmd()
    .arg("convert")
    .arg(&file)
    .assert()
    .success()
    .stdout(predicate::str::contains("Encoded"));
  let encoded = std::fs::read_to_string(&file).unwrap();
  assert!(encoded.is_ascii());
  assert!(encoded.starts_with("title=\\u0417"));

  asciify_cmd()
    .arg("convert")
    .arg(&file)
    .arg("--decode")
    .assert()
    .success()
    .stdout(predicate::str::contains("Decoded"));
  assert_eq!(std::fs::read_to_string(&file).unwrap(), "title=Заголовок\n");
}

#[test]
fn convert_to_output_file() {
  let temp = TempDir::new().unwrap();
  let input = temp.path().join("in.txt");
  let output = temp.path().join("out.txt");
  std::fs::write(&input, "тест").unwrap();

  asciify_cmd()
    .arg("convert")
    .arg(&input)
    .arg("--output")
    .arg(&output)
    .assert()
    .success();

  assert_eq!(std::fs::read_to_string(&input).unwrap(), "тест");
  assert_eq!(std::fs::read_to_string(&output).unwrap(), "\\u0442\\u0435\\u0441\\u0442");
}

#[test]
fn convert_reports_up_to_date() {
  let temp = TempDir::new().unwrap();
  let file = temp.path().join("plain.txt");
  std::fs::write(&file, "ascii only").unwrap();

  asciify_cmd()
    .arg("convert")
    .arg(&file)
    .assert()
    .success()
    .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn convert_json_output() {
  let temp = TempDir::new().unwrap();
  let file = temp.path().join("a.txt");
  std::fs::write(&file, "é").unwrap();

  let output = asciify_cmd().arg("convert").arg(&file).arg("--json").output().unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["direction"], "encode");
  assert_eq!(json["changed"], true);
  assert_eq!(json["bytes_out"], 6);
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn convert_missing_file_fails() {
  asciify_cmd()
    .args(["convert", "/nonexistent/path/file.txt"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("not found"));
}

#[test]
fn convert_decode_conflicts_with_all() {
  let temp = TempDir::new().unwrap();
  let file = temp.path().join("a.txt");
  std::fs::write(&file, "x").unwrap();

  asciify_cmd()
    .arg("convert")
    .arg(&file)
    .args(["--decode", "--all"])
    .assert()
    .failure();
}

#[test]
fn convert_invalid_utf8_fails() {
  let temp = TempDir::new().unwrap();
  let file = temp.path().join("latin1.txt");
  std::fs::write(&file, [0x63u8, 0x61, 0x66, 0xe9]).unwrap();

  asciify_cmd()
    .arg("convert")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("UTF-8"));
}
