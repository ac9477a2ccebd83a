mod common;

use assert_cmd::Command;
use clap::Parser;
use common::create_fixture;
use dirtree::cli::Args;
use dirtree::TreeConfig;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_flag() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print a directory hierarchy"))
        .stdout(predicate::str::contains("-f"))
        .stdout(predicate::str::contains("--files").not())
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirtree"));
}

#[test]
fn test_missing_path_is_usage_error() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_arguments_are_usage_error() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .args([".", "-f", "extra"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_nonexistent_path_exits_with_error() {
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg("/this/path/does/not/exist")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("dirtree: failed to render tree"))
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn test_file_path_exits_with_error() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("afile.txt");
    std::fs::write(&file, "hello").unwrap();

    Command::cargo_bin("dirtree")
        .unwrap()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_prints_directories_only_by_default() {
    let tmp = create_fixture(&["A/", "A/x.txt", "B/"]);
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("├───A\n└───B\n");
}

#[test]
fn test_files_flag_includes_files() {
    let tmp = create_fixture(&["A/", "A/x.txt", "B/"]);
    Command::cargo_bin("dirtree")
        .unwrap()
        .arg(tmp.path())
        .arg("-f")
        .assert()
        .success()
        .stdout("├───A\n│\t└───x.txt (empty)\n└───B\n");
}

#[test]
fn test_logging_stays_off_stdout() {
    let tmp = create_fixture(&["only/"]);
    Command::cargo_bin("dirtree")
        .unwrap()
        .env("RUST_LOG", "debug")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("└───only\n")
        .stderr(predicate::str::contains("directory complete"));
}

#[test]
fn test_parse_path_and_files_flag() {
    let args = Args::parse_from(["dirtree", "some/dir", "-f"]);
    assert_eq!(args.path, std::path::PathBuf::from("some/dir"));
    assert!(args.show_files);
    assert!(TreeConfig::from(&args).include_files);
}

#[test]
fn test_files_flag_defaults_off() {
    let args = Args::parse_from(["dirtree", "."]);
    assert!(!args.show_files);
    assert_eq!(TreeConfig::from(&args), TreeConfig::default());
}

#[test]
fn test_no_long_form_for_files_flag() {
    assert!(Args::try_parse_from(["dirtree", "--files", "."]).is_err());
}
