mod common;

use common::labgrade_in;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const ASSESSMENTS: &str = r#"{
  "assessments": [
    {
      "id": "as-001",
      "title": "Linear Regression Implementation",
      "lab_type": "ML",
      "student": { "name": "John Doe", "roll_number": "21CS001" },
      "status": "submitted",
      "due_date": "2024-01-20",
      "submissions": [
        { "filename": "linear_regression.py", "size": 15420 }
      ]
    },
    {
      "id": "as-002",
      "title": "Neural Network Classifier",
      "lab_type": "AI",
      "student": { "name": "Jane Smith" },
      "status": "graded",
      "total_score": 85,
      "grade": "A",
      "criterion_scores": { "Network Architecture": 90, "Training Process": 80 }
    },
    {
      "id": "as-003",
      "title": "E-commerce Web Application",
      "lab_type": "FSD",
      "student": { "name": "Mike Johnson" },
      "status": "graded",
      "total_score": 92,
      "criterion_scores": { "Frontend Implementation": 95 }
    },
    {
      "id": "as-004",
      "title": "Decision Tree Analysis",
      "lab_type": "ML",
      "student": { "name": "Sarah Wilson" },
      "status": "draft"
    }
  ]
}"#;

fn write_assessments(dir: &Path) -> PathBuf {
    let path = dir.join("assessments.json");
    fs::write(&path, ASSESSMENTS).unwrap();
    path
}

// ============================================================================
// assessments
// ============================================================================

#[test]
fn test_assessments_list_and_summary() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "as-001 [ML] Linear Regression Implementation - John Doe (submitted, -)",
        ))
        .stdout(predicate::str::contains("due 2024-01-20"))
        .stdout(predicate::str::contains("linear_regression.py [code] 15.1 KB"))
        .stdout(predicate::str::contains(
            "as-002 [AI] Neural Network Classifier - Jane Smith (graded, 85% A)",
        ))
        .stdout(predicate::str::contains("(graded, 92% A)"))
        .stdout(predicate::str::contains(
            "4 assessments: 1 draft, 1 pending review, 2 graded; average 89%",
        ));
}

#[test]
fn test_assessments_filters() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .args(["--status", "graded"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as-002"))
        .stdout(predicate::str::contains("as-003"))
        .stdout(predicate::str::contains("as-001").not());

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .args(["--lab", "ml", "--search", "decision"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as-004"))
        .stdout(predicate::str::contains("as-001").not())
        .stdout(predicate::str::contains("1 assessments: 1 draft"));

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .args(["--search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assessments found"));
}

#[test]
fn test_assessments_bad_status_is_usage_error() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .args(["--status", "lost"])
        .assert()
        .code(2);
}

#[test]
fn test_assessments_json() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    let output = labgrade_in(dir.path())
        .args(["--format", "json", "assessments"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["assessments"].as_array().unwrap().len(), 4);
    assert_eq!(json["assessments"][2]["grade"], "A");
    assert_eq!(json["assessments"][0]["submissions"], 1);
    assert_eq!(json["stats"]["graded"], 2);
    assert_eq!(json["stats"]["average_score"], 89);
}

#[test]
fn test_assessments_records() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .args(["--format", "records", "assessments"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H labgrade=1 records=1 mode=assessments assessments=4 graded=2 average=89",
        ))
        .stdout(predicate::str::contains(
            "A as-004 status=draft lab=ML score=- grade=- student=\"Sarah Wilson\"",
        ));
}

#[test]
fn test_assessments_yaml_document() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("set.yaml");
    fs::write(
        &file,
        r#"
assessments:
  - id: as-100
    title: Sorting Lab
    lab_type: ds
    student:
      name: Priya
    status: graded
    total_score: 58
"#,
    )
    .unwrap();

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "as-100 [DS] Sorting Lab - Priya (graded, 58% F)",
        ));
}

#[test]
fn test_assessments_duplicate_ids() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dup.json");
    fs::write(
        &file,
        r#"{"assessments": [
  {"id": "as-1", "title": "A", "lab_type": "ML", "student": {"name": "X"}, "status": "draft"},
  {"id": "as-1", "title": "B", "lab_type": "ML", "student": {"name": "Y"}, "status": "draft"}
]}"#,
    )
    .unwrap();

    labgrade_in(dir.path())
        .arg("assessments")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate assessment id: as-1"));
}

// ============================================================================
// report
// ============================================================================

#[test]
fn test_report_human() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assessments: 4 (1 draft, 1 submitted, 2 graded)",
        ))
        .stdout(predicate::str::contains("Average score: 89%"))
        .stdout(predicate::str::contains("Grade distribution"))
        .stdout(predicate::str::contains("100%"))
        .stdout(predicate::str::contains(
            "2 assessments, 2 students, average -, 0% complete",
        ))
        .stdout(predicate::str::contains(
            "1 assessments, 1 students, average 85%, 100% complete",
        ))
        .stdout(predicate::str::contains(
            "Frontend Implementation: 95% over 1 scores",
        ))
        .stdout(predicate::str::contains(
            "Jane Smith: 1 of 1 graded, average 85%",
        ))
        .stdout(predicate::str::contains(
            "John Doe: 0 of 1 graded, average -",
        ));
}

#[test]
fn test_report_json() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    let output = labgrade_in(dir.path())
        .args(["--format", "json", "report"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["total"], 4);
    assert_eq!(json["grade_distribution"]["graded"], 2);
    assert_eq!(json["grade_distribution"]["shares"][0]["grade"], "A");
    assert_eq!(json["grade_distribution"]["shares"][0]["count"], 2);
    assert_eq!(json["grade_distribution"]["shares"][0]["percent"], 100.0);

    let labs = json["labs"].as_array().unwrap();
    assert_eq!(labs.len(), 3);
    assert_eq!(labs[0]["lab_type"], "AI");
    assert_eq!(labs[2]["lab_type"], "ML");
    assert!(labs[2]["average_score"].is_null());

    assert_eq!(json["criteria"].as_array().unwrap().len(), 3);
    assert_eq!(json["students"].as_array().unwrap().len(), 4);
}

#[test]
fn test_report_lab_filter() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .args(["--lab", "FSD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assessments: 1 (0 draft, 0 submitted, 1 graded)"))
        .stdout(predicate::str::contains("Average score: 92%"))
        .stdout(predicate::str::contains("Jane Smith").not());
}

#[test]
fn test_report_custom_scale_changes_distribution() {
    let dir = tempdir().unwrap();
    let file = write_assessments(dir.path());
    fs::write(
        dir.path().join("labgrade.toml"),
        "[grade_scale]\nthresholds = [{ grade = \"A+\", min = 90 }, { grade = \"B\", min = 50 }]\n",
    )
    .unwrap();

    labgrade_in(dir.path())
        .args(["--format", "records", "report"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("G grade=A+ count=1 percent=50"))
        .stdout(predicate::str::contains("G grade=A count=1 percent=50"));
}

#[test]
fn test_report_missing_file() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["report", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("document not found"));
}

#[test]
fn test_report_empty_set() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("empty.toml");
    fs::write(&file, "assessments = []\n").unwrap();

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Assessments: 0"))
        .stdout(predicate::str::contains("Average score: -"))
        .stdout(predicate::str::contains("(no graded assessments)"));
}

const DATED: &str = r#"{
  "assessments": [
    {
      "id": "as-101", "title": "Regression", "lab_type": "ML",
      "student": { "name": "Jane Smith" }, "status": "graded",
      "submitted_at": "2024-01-10", "graded_at": "2024-01-25", "total_score": 80
    },
    {
      "id": "as-102", "title": "Perceptron", "lab_type": "AI",
      "student": { "name": "Jane Smith" }, "status": "graded",
      "submitted_at": "2024-02-05", "graded_at": "2024-02-12", "total_score": 90
    },
    {
      "id": "as-103", "title": "Clustering", "lab_type": "ML",
      "student": { "name": "John Doe" }, "status": "submitted",
      "submitted_at": "2024-02-20", "total_score": 40
    },
    {
      "id": "as-104", "title": "Search", "lab_type": "AI",
      "student": { "name": "Mike Johnson" }, "status": "draft",
      "due_date": "2024-03-15"
    }
  ]
}"#;

fn write_dated(dir: &Path) -> PathBuf {
    let path = dir.join("dated.json");
    fs::write(&path, DATED).unwrap();
    path
}

#[test]
fn test_report_distribution_ignores_submitted_scores() {
    let dir = tempdir().unwrap();
    let file = write_dated(dir.path());

    let output = labgrade_in(dir.path())
        .args(["--format", "json", "report"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["grade_distribution"]["graded"], 2);
    let shares = json["grade_distribution"]["shares"].as_array().unwrap();
    assert!(shares.iter().all(|s| s["grade"] != "F"));
}

#[test]
fn test_report_monthly_trends() {
    let dir = tempdir().unwrap();
    let file = write_dated(dir.path());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Trends (month)"))
        .stdout(predicate::str::contains(
            "2024-01: 1 submitted, 1 graded, 0 pending; ML 80%",
        ))
        .stdout(predicate::str::contains(
            "2024-02: 2 submitted, 1 graded, 1 pending; AI 90%",
        ))
        .stdout(predicate::str::contains(
            "Jane Smith: 2 of 2 graded, average 85% (AI 90%, ML 80%)",
        ));
}

#[test]
fn test_report_weekly_trend_records() {
    let dir = tempdir().unwrap();
    let file = write_dated(dir.path());

    labgrade_in(dir.path())
        .args(["--format", "records", "report"])
        .arg(&file)
        .args(["--period", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("period=week"))
        .stdout(predicate::str::contains(
            "P 2024-W02 submitted=1 graded=0 pending=0 labs=-",
        ))
        .stdout(predicate::str::contains(
            "P 2024-W04 submitted=0 graded=1 pending=0 labs=ML:80",
        ))
        .stdout(predicate::str::contains(
            "S assessments=2 graded=2 average=85 labs=AI:90,ML:80 \"Jane Smith\"",
        ));
}

#[test]
fn test_report_date_range() {
    let dir = tempdir().unwrap();
    let file = write_dated(dir.path());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .args(["--since", "2024-02-01", "--until", "2024-02-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assessments: 2 (0 draft, 1 submitted, 1 graded)",
        ))
        .stdout(predicate::str::contains("Mike Johnson").not())
        .stdout(predicate::str::contains("2024-01").not());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .args(["--since", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assessments: 1 (1 draft"));
}

#[test]
fn test_report_inverted_range_is_usage_error() {
    let dir = tempdir().unwrap();
    let file = write_dated(dir.path());

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .args(["--since", "2024-03-01", "--until", "2024-01-01"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("after --until"));

    labgrade_in(dir.path())
        .arg("report")
        .arg(&file)
        .args(["--since", "March"])
        .assert()
        .code(2);
}
