//! Black-box CLI tests over the built binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn hh() -> Command {
    Command::cargo_bin("hh").unwrap()
}

#[test]
fn single_size_prints_the_2020_apportionment() {
    hh().args(["--size", "435", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("California\t52"))
        .stdout(predicate::str::contains("Wyoming\t1"))
        .stdout(predicate::str::contains("size\t435"));
}

#[test]
fn capped_scan_reports_an_ideal_size() {
    hh().args(["--scan", "--max-size", "80", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size\tMaxMinQuotient"))
        .stdout(predicate::str::contains("ideal size"));
}

#[test]
fn size_below_the_state_floor_is_a_usage_error() {
    hh().args(["--size", "49", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("below the minimum"));
}

#[test]
fn zero_size_is_rejected_at_parse_time() {
    hh().args(["--size", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid size"));
}

#[test]
fn missing_table_file_fails_fast() {
    hh().args(["--table", "/no/such/table.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn corrupt_table_is_a_data_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write as _;
    file.write_all(b"p1\np2\np3\np4\np5\nAlpha\nnot-a-number\n1\n\n")
        .unwrap();

    hh().args(["--table"])
        .arg(file.path())
        .arg("--size")
        .arg("50")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn out_dir_receives_a_json_report() {
    let dir = tempfile::tempdir().unwrap();
    hh().args(["--size", "435", "--quiet", "--out"])
        .arg(dir.path())
        .assert()
        .success();

    let report = std::fs::read_to_string(dir.path().join("allocation.json")).unwrap();
    assert!(report.contains("\"size\": 435"));
}
