use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn script_with(contents: &str) -> tempfile::NamedTempFile {
    let mut script = tempfile::NamedTempFile::new().expect("temp script");
    write!(script, "{contents}").expect("write script");
    script
}

fn loxa() -> Command {
    Command::cargo_bin("loxa").expect("loxa binary")
}

#[test]
fn file_mode_prints_the_serialized_tree() {
    let script = script_with("1 + 2 * 3");

    loxa().arg(script.path())
          .assert()
          .success()
          .stdout("(+ 1 (* 2 3))\n");
}

#[test]
fn file_mode_exits_distinctly_on_diagnostics() {
    let script = script_with("(1 + 2");

    loxa().arg(script.path())
          .assert()
          .failure()
          .code(65)
          .stderr(predicate::str::contains(
              "[line 1] Error at end: Expect ')' after expression.",
          ));
}

#[test]
fn file_mode_reports_the_diagnosed_line() {
    let script = script_with("// header\n\"abc");

    loxa().arg(script.path())
          .assert()
          .failure()
          .code(65)
          .stderr(predicate::str::contains("[line 2] Error: Unterminated string."));
}

#[test]
fn file_mode_rejects_unreadable_scripts() {
    loxa().arg("no/such/script.lox")
          .assert()
          .failure()
          .code(1)
          .stderr(predicate::str::contains("Failed to read the input file"));
}

#[test]
fn prompt_mode_keeps_accepting_input_after_an_error() {
    loxa().write_stdin("(1 + 2\n1 + 2 * 3\n")
          .assert()
          .success()
          .stdout(predicate::str::contains("(+ 1 (* 2 3))"))
          .stderr(predicate::str::contains("Expect ')' after expression."));
}
