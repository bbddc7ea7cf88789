// CLI surface tests - help output only, no network access required.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_every_subcommand() {
    let mut cmd = Command::cargo_bin("recon-desk").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("note"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("approve"))
        .stdout(predicate::str::contains("reset-login"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"));
}

#[test]
fn report_help_names_the_report_kinds() {
    let mut cmd = Command::cargo_bin("recon-desk").unwrap();

    cmd.args(["report", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing-trx"))
        .stdout(predicate::str::contains("multi-trade"))
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--timings"));
}

#[test]
fn unknown_report_kind_is_rejected_with_the_valid_slugs() {
    let mut cmd = Command::cargo_bin("recon-desk").unwrap();

    cmd.args(["report", "not-a-report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing-trx"));
}

#[test]
fn assign_requires_a_user_or_clear() {
    let mut cmd = Command::cargo_bin("recon-desk").unwrap();

    cmd.args(["assign", "t-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--clear"));
}
