use assert_cmd::Command;
use predicates::prelude::*;

// Unroutable endpoints: reaching any of them would exit with the upstream code (4).
const DEAD: &str = "http://127.0.0.1:9/unused";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pop-penny").unwrap();
    cmd.args([
        "--population-url",
        DEAD,
        "--currency-url",
        DEAD,
        "--exchange-url",
        DEAD,
    ]);
    cmd
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("pop-penny").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pop-penny"))
        .stdout(predicate::str::contains("--strict"))
        .stdout(predicate::str::contains("--out").not())
        .stdout(predicate::str::contains("--format").not());
}

#[test]
fn non_integer_year_flag_fails_before_any_request() {
    cmd()
        .args(["--year", "abc", "--countries", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("That's not an integer number"));
}

#[test]
fn non_integer_year_prompt_fails_before_any_request() {
    cmd()
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("From which year"))
        .stderr(predicate::str::contains("That's not an integer number"));
}

#[test]
fn zero_countries_is_rejected() {
    cmd()
        .write_stdin("2020\n0\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("How many countries"))
        .stderr(predicate::str::contains("needs to be more than 0"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn report_online_population() {
    let mut cmd = Command::cargo_bin("pop-penny").unwrap();
    cmd.args(["--year", "2020", "--countries", "5", "--stats"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Top 5 countries by Population in year 2020"));
}
