use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn projectile_prints_results_and_writes_exports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("out/trajectory.csv");
    let json_path = dir.path().join("out/result.json");

    Command::cargo_bin("physics")
        .expect("physics bin")
        .args([
            "projectile",
            "--velocity",
            "20",
            "--angle",
            "45",
            "--csv",
            csv_path.to_str().unwrap(),
            "--json",
            json_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time of Flight: 2.88 s"))
        .stdout(predicate::str::contains("Max Height: 10.19 m"))
        .stdout(predicate::str::contains("Range: 40.77 m"));

    let csv = fs::read_to_string(&csv_path).expect("csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Distance (m),Height (m)"));
    assert_eq!(lines.count(), 100);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("json")).expect("parse");
    assert_eq!(json["topic"], "projectile");
    assert_eq!(json["curve_points"], 100);
    assert_eq!(json["results"][0]["name"], "Time of Flight");
}

#[test]
fn upward_transition_warns_and_succeeds() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .args(["energy-transition", "--n-initial", "1", "--n-final", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn]"))
        .stdout(predicate::str::contains("Wavelength").not());
}

#[test]
fn out_of_bounds_values_are_clamped() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .args(["free-fall", "--height", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("height = 100.00 m"));
}

#[test]
fn list_shows_every_topic() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("projectile"))
        .stdout(predicate::str::contains("Lens Formula"))
        .stdout(predicate::str::contains("--frequency-exponent"));
}

#[test]
fn stdout_csv_is_pure_and_plottable() {
    let output = Command::cargo_bin("physics")
        .expect("physics bin")
        .args(["shm", "--points", "10", "--csv", "-"])
        .output()
        .expect("run physics");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Curve: 10 points"));

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output.stdout.as_slice());
    let headers = rdr.headers().expect("headers").clone();
    assert_eq!(&headers[0], "Time (s)");
    assert_eq!(&headers[1], "Displacement (m)");
    let rows: Vec<(f64, f64)> = rdr
        .records()
        .map(|record| {
            let record = record.expect("record");
            (
                record[0].parse().expect("x value"),
                record[1].parse().expect("y value"),
            )
        })
        .collect();
    assert_eq!(rows.len(), 10);

    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("shm.csv");
    let png_path = dir.path().join("shm.png");
    fs::write(&csv_path, &output.stdout).expect("write csv");
    Command::cargo_bin("curve_plot")
        .expect("curve_plot bin")
        .args([
            "--input",
            csv_path.to_str().unwrap(),
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "300",
            "--height",
            "200",
            "--no-labels",
        ])
        .assert()
        .success();
    assert!(fs::metadata(png_path).expect("png metadata").len() > 0);
}

#[test]
fn csv_and_json_cannot_share_stdout() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .args(["shm", "--csv", "-", "--json", "-"])
        .assert()
        .failure();
}

#[test]
fn negative_focal_length_is_accepted() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .args(["lens", "--focal-length", "-0.2", "--object-distance", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image Distance:"));
}

#[test]
fn reports_library_version() {
    Command::cargo_bin("physics")
        .expect("physics bin")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(physics_explorer::version()));
}
