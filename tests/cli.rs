use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_iconfont-sync")))
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "config file (.iconfont.yml or .iconfont.yaml) is not found or it is empty.",
        ));
}

#[test]
fn empty_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".iconfont.yml"), "\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not found or it is empty"));
}

#[test]
fn missing_css_url_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".iconfont.yaml"), "outputDir: icons\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("the \"cssUrl\" is required."));

    assert!(!dir.path().join("icons").exists());
}

#[test]
fn explicit_config_missing_css_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("icons.yml");
    fs::write(&path, "filename: icons\n").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cssUrl"));
}

#[test]
fn explicit_config_not_readable() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-c", dir.path().join("nope.yml").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.yml"));
}

#[test]
fn help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--quiet"));
}
