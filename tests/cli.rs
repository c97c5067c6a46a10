use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = "\
Index,Location,Region,District,sCh,cCh,CFR,deaths,reporting_date
1,Kampala,Central,Kampala District,100,20,2.0,2,05/01/2020
2,Gulu,Northern,Gulu District,50,10,1.0,1,10/02/2020
3,Mbale,Eastern,Mbale District,30,5,0.0,0,not-a-date
";

fn sample_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("reports.csv");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(SAMPLE.as_bytes()).unwrap();
    path
}

#[test]
fn help_shows_usage() {
    let mut cmd = Command::cargo_bin("cholera-insights").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"));
}

#[test]
fn report_prints_summary_and_insights() {
    let dir = tempfile::tempdir().unwrap();
    let data = sample_csv(&dir);

    let mut cmd = Command::cargo_bin("cholera-insights").unwrap();
    cmd.args(["report", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("reports=2"))
        .stdout(predicate::str::contains("situation reports"))
        .stderr(predicate::str::contains("1 skipped"));
}

#[test]
fn report_respects_date_window_and_writes_json() {
    let dir = tempfile::tempdir().unwrap();
    let data = sample_csv(&dir);
    let out = dir.path().join("model.json");

    let mut cmd = Command::cargo_bin("cholera-insights").unwrap();
    cmd.args(["report", "--data"])
        .arg(&data)
        .args(["--start", "2020-02-01", "--end", "2020-02-28", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("reports=1"));

    let text = std::fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["summary"]["total_reports"], 1);
}

#[test]
fn missing_file_fails_cleanly() {
    let mut cmd = Command::cargo_bin("cholera-insights").unwrap();
    cmd.args(["report", "--data", "/nonexistent/reports.csv"])
        .assert()
        .failure();
}
