mod common;

use common::{labgrade_in, write_rubric};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ML_SCORES: [&str; 6] = [
    "--score",
    "cr-code-efficiency=80",
    "--score",
    "cr-algorithm-accuracy=60",
    "--score",
    "cr-documentation=90",
];

#[test]
fn test_grade_builtin_rubric_human() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["grade", "--rubric", "rb-ml-algorithm"])
        .args(ML_SCORES)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ML Algorithm Assessment (rb-ml-algorithm)",
        ))
        .stdout(predicate::str::contains("80/100"))
        .stdout(predicate::str::contains("Total: 77%  ***..  Grade: C+"))
        .stderr(predicate::str::contains("warning").not());
}

#[test]
fn test_grade_json_evaluation() {
    let dir = tempdir().unwrap();
    let output = labgrade_in(dir.path())
        .args(["--format", "json", "grade", "-r", "rb-ml-algorithm"])
        .args(ML_SCORES)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rubric"], "rb-ml-algorithm");
    assert_eq!(json["graded_by"], "faculty");
    assert_eq!(json["evaluation"]["total"], 77);
    assert_eq!(json["evaluation"]["star_rating"], 3);
    assert_eq!(json["evaluation"]["grade"], "C+");
    assert_eq!(json["evaluation"]["substituted"].as_array().unwrap().len(), 0);
    assert_eq!(json["criteria"].as_array().unwrap().len(), 3);
    assert_eq!(json["criteria"][0]["weight"], 40.0);
}

#[test]
fn test_grade_lenient_missing_score_counts_as_zero() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args([
            "grade",
            "-r",
            "rb-ml-algorithm",
            "--score",
            "cr-code-efficiency=80",
            "--score",
            "cr-algorithm-accuracy=60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-/100"))
        .stdout(predicate::str::contains("Total: 50%  **...  Grade: F"))
        .stderr(predicate::str::contains("lenient mode"))
        .stderr(predicate::str::contains("Documentation"));
}

#[test]
fn test_grade_lenient_out_of_range_is_substituted() {
    let dir = tempdir().unwrap();
    let output = labgrade_in(dir.path())
        .args(["--format", "json", "grade", "-r", "rb-ml-algorithm"])
        .args([
            "--score",
            "cr-code-efficiency=150",
            "--score",
            "cr-algorithm-accuracy=100",
            "--score",
            "cr-documentation=100",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["evaluation"]["total"], 60);
    assert_eq!(
        json["evaluation"]["substituted"][0],
        "cr-code-efficiency"
    );
}

#[test]
fn test_grade_strict_rejects_missing_score() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args([
            "grade",
            "-r",
            "rb-ml-algorithm",
            "--strict",
            "--score",
            "cr-code-efficiency=80",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid score"));
}

#[test]
fn test_grade_strict_json_error_type() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args([
            "--format",
            "json",
            "grade",
            "-r",
            "rb-ml-algorithm",
            "--strict",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_score\""));
}

#[test]
fn test_grade_strict_mode_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("labgrade.toml"), "mode = \"strict\"\n").unwrap();

    labgrade_in(dir.path())
        .args(["grade", "-r", "rb-ml-algorithm", "--score", "cr-documentation=50"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid score"));
}

#[test]
fn test_grade_custom_scale_from_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("labgrade.toml"),
        "grader = \"Dr. Rao\"\n\n[grade_scale]\nthresholds = [{ grade = \"A\", min = 75 }, { grade = \"B\", min = 50 }]\n",
    )
    .unwrap();

    let output = labgrade_in(dir.path())
        .args(["--format", "json", "grade", "-r", "rb-ml-algorithm"])
        .args(ML_SCORES)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["evaluation"]["grade"], "A");
    assert_eq!(json["graded_by"], "Dr. Rao");
}

#[test]
fn test_grade_unknown_criterion() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["grade", "-r", "rb-ml-algorithm", "--score", "cr-nope=10"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("criterion not found: cr-nope"));
}

#[test]
fn test_grade_unknown_rubric_id() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["grade", "-r", "rb-does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rubric not found"));
}

#[test]
fn test_grade_missing_rubric_file() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["grade", "-r", "nowhere.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("document not found"));
}

#[test]
fn test_grade_sheet_and_output_record() {
    let dir = tempdir().unwrap();
    let rubric = write_rubric(
        dir.path(),
        "rubric.toml",
        &[
            ("cr-code", "Code Quality", 60.0),
            ("cr-viva", "Viva", 40.0),
        ],
    );
    let sheet = dir.path().join("sheet.toml");
    fs::write(
        &sheet,
        r#"
rubric = "rb-test"
assessment = "as-001"

[[scores]]
criterion = "cr-code"
score = 90
feedback = "Clean implementation"

[[scores]]
criterion = "cr-viva"
score = 70
"#,
    )
    .unwrap();
    let record = dir.path().join("record.json");

    labgrade_in(dir.path())
        .arg("grade")
        .arg("--rubric")
        .arg(&rubric)
        .arg("--sheet")
        .arg(&sheet)
        .arg("--output")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Assessment: as-001"))
        .stdout(predicate::str::contains("Clean implementation"))
        .stdout(predicate::str::contains("Total: 82%  ****.  Grade: B"))
        .stdout(predicate::str::contains("Saved grade record to"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    assert_eq!(saved["assessment"], "as-001");
    assert_eq!(saved["evaluation"]["total"], 82);
    assert_eq!(saved["criteria"][0]["feedback"], "Clean implementation");
}

#[test]
fn test_grade_score_flag_overrides_sheet() {
    let dir = tempdir().unwrap();
    let rubric = write_rubric(
        dir.path(),
        "rubric.toml",
        &[("cr-code", "Code Quality", 50.0), ("cr-viva", "Viva", 50.0)],
    );
    let sheet = dir.path().join("sheet.json");
    fs::write(
        &sheet,
        r#"{"scores": [{"criterion": "cr-code", "score": 40}, {"criterion": "cr-viva", "score": 40}]}"#,
    )
    .unwrap();

    labgrade_in(dir.path())
        .arg("grade")
        .arg("-r")
        .arg(&rubric)
        .arg("-s")
        .arg(&sheet)
        .args(["--score", "cr-viva=100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 70%"));
}

#[test]
fn test_grade_sheet_for_other_rubric_rejected() {
    let dir = tempdir().unwrap();
    let sheet = dir.path().join("sheet.toml");
    fs::write(&sheet, "rubric = \"rb-full-stack\"\n").unwrap();

    labgrade_in(dir.path())
        .arg("grade")
        .args(["-r", "rb-ml-algorithm"])
        .arg("-s")
        .arg(&sheet)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("grade sheet rubric"));
}

#[test]
fn test_grade_records_output() {
    let dir = tempdir().unwrap();
    labgrade_in(dir.path())
        .args(["--format", "records", "grade", "-r", "rb-ml-algorithm"])
        .args(ML_SCORES)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H labgrade=1 records=1 mode=grade rubric=rb-ml-algorithm",
        ))
        .stdout(predicate::str::contains("scoring=lenient"))
        .stdout(predicate::str::contains(
            "T total=77 stars=3 grade=C+ substituted=0",
        ))
        .stdout(predicate::str::contains(
            "C cr-code-efficiency weight=40 score=80 max=100 substituted=false \"Code Efficiency\"",
        ));
}

#[test]
fn test_grade_warns_on_weight_total() {
    let dir = tempdir().unwrap();
    let rubric = write_rubric(
        dir.path(),
        "short.toml",
        &[("cr-code", "Code Quality", 50.0), ("cr-viva", "Viva", 40.0)],
    );

    labgrade_in(dir.path())
        .arg("grade")
        .arg("-r")
        .arg(&rubric)
        .args(["--score", "cr-code=100", "--score", "cr-viva=100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 90%"))
        .stderr(predicate::str::contains("weights total 90%"));
}

#[test]
fn test_grade_sheet_overall_feedback_round_trip() {
    let dir = tempdir().unwrap();
    let rubric = write_rubric(
        dir.path(),
        "rubric.toml",
        &[("cr-code", "Code Quality", 100.0)],
    );
    let sheet = dir.path().join("sheet.toml");
    fs::write(
        &sheet,
        r#"
[[scores]]
criterion = "cr-code"
score = 88

[feedback]
comment = "Well documented notebook"
strengths = "Clean plots"
improvements = "Compare against a baseline"
"#,
    )
    .unwrap();
    let record = dir.path().join("record.json");

    labgrade_in(dir.path())
        .arg("grade")
        .arg("-r")
        .arg(&rubric)
        .arg("-s")
        .arg(&sheet)
        .arg("-o")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment: Well documented notebook"))
        .stdout(predicate::str::contains("Strengths: Clean plots"))
        .stdout(predicate::str::contains(
            "Improvements: Compare against a baseline",
        ));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    assert_eq!(saved["feedback"]["comment"], "Well documented notebook");
    assert_eq!(saved["feedback"]["strengths"], "Clean plots");
    assert_eq!(saved["feedback"]["improvements"], "Compare against a baseline");
}

#[test]
fn test_grade_comment_flag_overrides_sheet() {
    let dir = tempdir().unwrap();
    let rubric = write_rubric(
        dir.path(),
        "rubric.toml",
        &[("cr-code", "Code Quality", 100.0)],
    );
    let sheet = dir.path().join("sheet.toml");
    fs::write(
        &sheet,
        "[[scores]]\ncriterion = \"cr-code\"\nscore = 70\n\n[feedback]\ncomment = \"draft\"\nstrengths = \"Tidy\"\n",
    )
    .unwrap();

    labgrade_in(dir.path())
        .args(["--format", "records", "grade", "-r"])
        .arg(&rubric)
        .arg("-s")
        .arg(&sheet)
        .args(["--comment", "Resubmit with \"tests\""])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "F comment \"Resubmit with \\\"tests\\\"\"",
        ))
        .stdout(predicate::str::contains("F strengths \"Tidy\""));
}
