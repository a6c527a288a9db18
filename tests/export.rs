use std::io::Write;

use route_wind_analyzer::export::{segments, summary};

#[test]
fn segment_csv_round_trips_with_two_decimals() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("segments.csv");

    let mut writer = segments::writer_for_path(&path).unwrap();
    segments::write_header(writer.as_mut()).unwrap();
    segments::Record {
        segment_index: 0,
        heading_deg: 45,
        relative_angle_deg: 312.5,
        headwind_pct: 85.0,
        tailwind_pct: 0.0,
        crosswind_pct: 50.25,
    }
    .write_to(writer.as_mut())
    .unwrap();
    writer.flush().unwrap();
    drop(writer);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "segment_index");
    assert_eq!(&headers[2], "relative_angle_deg");

    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[0], "0");
    assert_eq!(&record[1], "45");
    assert_eq!(&record[2], "312.50");
    assert_eq!(&record[3], "85.00");
    assert_eq!(&record[4], "0.00");
    assert_eq!(&record[5], "50.25");
}

#[test]
fn writer_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/artifacts/segments.csv");
    let mut writer = segments::writer_for_path(&path).unwrap();
    segments::write_header(writer.as_mut()).unwrap();
    writer.flush().unwrap();
    drop(writer);
    assert!(path.exists());
}

#[test]
fn summary_sidecar_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("route.summary.json");

    let payload = summary::Summary {
        generated_utc: summary::timestamp_utc(),
        segment_count: 3,
        temperature_c: 20.0,
        wind_speed_ms: 5.0,
        headwind_pct: 50.0 / 3.0,
        tailwind_pct: 100.0 / 3.0,
        crosswind_pct: 100.0 / 3.0,
    };
    summary::write_sidecar(&path, &payload).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["segment_count"], 3);
    assert!((value["headwind_pct"].as_f64().unwrap() - 50.0 / 3.0).abs() < 1e-9);
    assert!(value["generated_utc"].as_str().unwrap().ends_with('Z'));
}
