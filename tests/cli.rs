use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn headings_report_prints_summary_means() {
    Command::cargo_bin("route_report")
        .unwrap()
        .args([
            "--headings",
            "0,90,180",
            "--wind-dir",
            "0",
            "--wind-speed",
            "5",
            "--temperature",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "path mean: headwind 16.67%, tailwind 33.33%, crosswind 33.33%",
        ));
}

#[test]
fn route_csv_report_writes_csv_and_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let route_path = dir.path().join("route.csv");
    fs::write(&route_path, "59.0,10.0\n59.1,10.0\n59.1,10.1\n").unwrap();
    let out_path = dir.path().join("impacts.csv");

    Command::cargo_bin("route_report")
        .unwrap()
        .arg("--route")
        .arg(&route_path)
        .args(["--wind-dir", "180", "--wind-speed", "4", "--temperature", "12.5"])
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wind 4.0 m/s"));

    let csv_text = fs::read_to_string(&out_path).unwrap();
    assert!(csv_text.starts_with("segment_index,heading_deg,"));
    // Header plus one row per segment.
    assert_eq!(csv_text.lines().count(), 3);
    assert!(out_path.with_extension("summary.json").exists());
}

#[test]
fn observation_yaml_feeds_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let obs_path = dir.path().join("observation.yaml");
    fs::write(
        &obs_path,
        "direction_deg: 180\nspeed_ms: 4.0\ntemperature_c: 12.5\n",
    )
    .unwrap();

    Command::cargo_bin("route_report")
        .unwrap()
        .args(["--headings", "0"])
        .arg("--observation")
        .arg(&obs_path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "path mean: headwind 0.00%, tailwind 100.00%, crosswind 0.00%",
        ));
}

#[test]
fn library_version_smoke() {
    assert!(!route_wind_analyzer::version().is_empty());
}

#[test]
fn missing_inputs_fail_with_guidance() {
    Command::cargo_bin("route_report")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--route or --headings"));
}
