//! CLI integration tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

fn calc_cli() -> Command {
    cargo_bin_cmd!("calc_cli")
}

fn reference_request() -> Value {
    json!({
        "width": 12, "height": 8, "cover": 1.5,
        "size": "#4", "spacing": 6,
        "f_c": 4, "steelGrade": "60", "concDensity": 150,
        "M_u": 8, "M_s": 6, "V_u": 5,
        "phi_m": 0.9, "phi_v": 0.9
    })
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn test_cli_help() {
    calc_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"));
}

#[test]
fn test_evaluate_json_report() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &reference_request());

    let output = calc_cli()
        .args(["evaluate", "--format", "json"])
        .arg(&request)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["weight"], json!(0.1));
    assert_eq!(report["M_cr"], json!(5.1));
    assert_eq!(report["cracked"], json!(true));
    assert_eq!(report["phiMn"], json!(10.7));
    assert_eq!(report["phiVn"], json!(8.1));
    assert_eq!(report["s_max"], json!(12.43));
    for check in ["moment_capacity", "shear_capacity", "min_reinf", "crack_control", "ductility", "dist_reinf"] {
        assert_eq!(report[check], json!(true), "{}", check);
    }
}

#[test]
fn test_evaluate_human_output() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &reference_request());

    calc_cli()
        .arg("evaluate")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("CONCRETE SECTION EVALUATION"))
        .stdout(predicate::str::contains("Service (cracked)"))
        .stdout(predicate::str::contains("RESULT: PASS"));
}

#[test]
fn test_evaluate_from_stdin() {
    calc_cli()
        .args(["evaluate", "-", "--format", "json"])
        .write_stdin(reference_request().to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phiMn\""));
}

#[test]
fn test_failed_check_exits_zero_without_flag() {
    let dir = TempDir::new().unwrap();
    let mut request = reference_request();
    request["M_u"] = json!(20);
    let path = write_json(&dir, "request.json", &request);

    calc_cli()
        .arg("evaluate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULT: FAIL (moment_capacity)"));
}

#[test]
fn test_fail_on_check_exits_one() {
    let dir = TempDir::new().unwrap();
    let mut request = reference_request();
    request["M_u"] = json!(20);
    let path = write_json(&dir, "request.json", &request);

    calc_cli()
        .args(["evaluate", "--fail-on-check"])
        .arg(&path)
        .assert()
        .code(1);
}

#[test]
fn test_unknown_bar_size_exits_not_found() {
    let dir = TempDir::new().unwrap();
    let mut request = reference_request();
    request["size"] = json!("#13");
    let path = write_json(&dir, "request.json", &request);

    calc_cli()
        .args(["evaluate", "--format", "json"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("UnknownBarSize"));
}

#[test]
fn test_zero_spacing_exits_bad_request() {
    let dir = TempDir::new().unwrap();
    let mut request = reference_request();
    request["spacing"] = json!(0);
    let path = write_json(&dir, "request.json", &request);

    calc_cli()
        .arg("evaluate")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("spacing"));
}

#[test]
fn test_non_numeric_field_exits_bad_request() {
    let dir = TempDir::new().unwrap();
    let mut request = reference_request();
    request["f_c"] = json!("four");
    let path = write_json(&dir, "request.json", &request);

    calc_cli().arg("evaluate").arg(&path).assert().code(2);
}

#[test]
fn test_settings_file_overrides_exposure() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &reference_request());
    let settings = write_json(&dir, "settings.json", &json!({ "default_exposure": "Class2" }));

    let output = calc_cli()
        .args(["evaluate", "--format", "json", "--settings"])
        .arg(&settings)
        .arg(&request)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    let s_max = report["s_max"].as_f64().unwrap();
    assert!(s_max < 12.43);
}

#[test]
fn test_bars_lists_standard_catalog() {
    calc_cli()
        .arg("bars")
        .assert()
        .success()
        .stdout(predicate::str::contains("#3"))
        .stdout(predicate::str::contains("#18"));
}

#[test]
fn test_grades_lists_standard_catalog() {
    calc_cli()
        .arg("grades")
        .assert()
        .success()
        .stdout(predicate::str::contains("60"))
        .stdout(predicate::str::contains("0.76"));
}

#[test]
fn test_custom_catalog_tables() {
    let dir = TempDir::new().unwrap();
    let bars = dir.path().join("bars.csv");
    let grades = dir.path().join("grades.csv");
    fs::write(&bars, "bar_size,bar_diameter,bar_area,bar_weight,bar_perimeter\n#4,0.5,0.2,0.668,1.571\n").unwrap();
    fs::write(&grades, "grade,yield,gamma_3\n60,60,0.67\n").unwrap();

    calc_cli()
        .arg("bars")
        .arg("--bars")
        .arg(&bars)
        .arg("--grades")
        .arg(&grades)
        .assert()
        .success()
        .stdout(predicate::str::contains("#4"))
        .stdout(predicate::str::contains("#5").not());
}

#[test]
fn test_broken_catalog_exits_four() {
    let dir = TempDir::new().unwrap();
    let request = write_json(&dir, "request.json", &reference_request());
    let grades = dir.path().join("grades.csv");
    fs::write(&grades, "grade,yield,gamma_3\n60,60,0.67\n").unwrap();

    calc_cli()
        .arg("evaluate")
        .arg(&request)
        .arg("--bars")
        .arg(dir.path().join("missing.csv"))
        .arg("--grades")
        .arg(&grades)
        .assert()
        .code(4);
}
