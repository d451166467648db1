// Binary surface tests: help output, the no-argument overview, the stages
// listing, and config initialization.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn short_help_shows_about_and_subcommands() {
    let mut cmd = Command::cargo_bin("zeal-deploy").unwrap();

    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulated deployment progress display"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("stages"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn long_help_shows_the_full_description() {
    let mut cmd = Command::cargo_bin("zeal-deploy").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timing theater"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("stages"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn default_invocation_shows_overview_and_quick_start() {
    let mut cmd = Command::cargo_bin("zeal-deploy").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ZEAL DEPLOY"))
        .stdout(predicate::str::contains("📊 Quick start:"))
        .stdout(predicate::str::contains("zeal-deploy run"))
        .stdout(predicate::str::contains("zeal-deploy stages"));
}

#[test]
fn stages_lists_the_default_catalog() {
    let mut cmd = Command::cargo_bin("zeal-deploy").unwrap();

    cmd.arg("stages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upload received"))
        .stdout(predicate::str::contains("Success!"))
        .stdout(predicate::str::contains(" 8. "));
}

#[test]
fn init_writes_default_config_and_refuses_to_clobber() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("zeal-deploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(dir.path().join("zeal-deploy.toml").exists());

    Command::cargo_bin("zeal-deploy")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();

    Command::cargo_bin("zeal-deploy")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
