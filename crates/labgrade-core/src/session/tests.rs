use super::*;
use crate::grade::LetterGrade;
use crate::rubric::LabType;
use crate::scoring::ScoringMode;

fn lab_rubric() -> (Rubric, Vec<CriterionId>) {
    let mut rubric = Rubric::new("ML Algorithm Assessment Rubric", LabType::Ml);
    let ids = vec![
        rubric.add_criterion("Code Efficiency", Some(Weight::from_percent(40.0))),
        rubric.add_criterion("Experimental Setup", Some(Weight::from_percent(30.0))),
        rubric.add_criterion("Viva Q&A", Some(Weight::from_percent(30.0))),
    ];
    (rubric, ids)
}

fn faculty() -> SessionContext {
    SessionContext::login(User::faculty("Faculty Akash"))
}

#[test]
fn test_students_cannot_grade() {
    let (rubric, _) = lab_rubric();
    let ctx = SessionContext::login(User::student("John Doe"));
    let result = GradingSession::open(&ctx, &rubric, None);
    assert!(matches!(result, Err(GradeError::PermissionDenied { .. })));
    ctx.logout();
}

#[test]
fn test_logout_reports_session_length() {
    let elapsed = faculty().logout();
    assert!(elapsed >= TimeDelta::zero());
    assert!(elapsed < TimeDelta::minutes(1));
}

#[test]
fn test_fresh_session_scores_zero() {
    let (rubric, _) = lab_rubric();
    let ctx = faculty();
    let session = GradingSession::open(&ctx, &rubric, Some("1".to_string())).unwrap();
    let evaluation = session.evaluate(&ScoringPolicy::default()).unwrap();
    assert_eq!(evaluation.total, 0);
    assert_eq!(evaluation.grade, LetterGrade::F);
    assert_eq!(evaluation.substituted.len(), 3);
}

#[test]
fn test_total_follows_every_edit() {
    let (rubric, ids) = lab_rubric();
    let ctx = faculty();
    let policy = ScoringPolicy::default();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();

    session.set_score(&ids[0], 80.0).unwrap();
    assert_eq!(session.evaluate(&policy).unwrap().total, 32);

    session.set_score(&ids[1], 60.0).unwrap();
    session.set_score(&ids[2], 90.0).unwrap();
    assert_eq!(session.evaluate(&policy).unwrap().total, 77);

    session.set_score(&ids[2], 100.0).unwrap();
    assert_eq!(session.evaluate(&policy).unwrap().total, 80);

    session.clear_score(&ids[2]).unwrap();
    assert_eq!(session.evaluate(&policy).unwrap().total, 50);
}

#[test]
fn test_renamed_criterion_keeps_its_score() {
    let (mut rubric, ids) = lab_rubric();
    rubric.criteria[2].name = "Oral Examination".to_string();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    session.set_score(&ids[2], 90.0).unwrap();
    assert_eq!(session.score(&ids[2]).unwrap().score, Some(90.0));
}

#[test]
fn test_unknown_criterion_rejected() {
    let (rubric, _) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    let stranger = CriterionId::new("cr-stranger").unwrap();
    assert!(matches!(
        session.set_score(&stranger, 50.0),
        Err(GradeError::NotFound { .. })
    ));
    assert!(session.set_feedback(&stranger, "n/a").is_err());
}

#[test]
fn test_strict_policy_surfaces_out_of_range_entry() {
    let (rubric, ids) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    for id in &ids {
        session.set_score(id, 70.0).unwrap();
    }
    session.set_score(&ids[0], 150.0).unwrap();
    let policy = ScoringPolicy::default().with_mode(ScoringMode::Strict);
    assert!(matches!(
        session.evaluate(&policy),
        Err(GradeError::InvalidScore { .. })
    ));
}

#[test]
fn test_apply_sheet() {
    let (rubric, ids) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    let sheet = GradeSheet {
        rubric: Some(rubric.id.clone()),
        assessment: Some("asm-7".to_string()),
        scores: vec![
            SheetEntry {
                criterion: ids[0].clone(),
                score: Some(80.0),
                feedback: "Efficient".to_string(),
            },
            SheetEntry {
                criterion: ids[1].clone(),
                score: Some(60.0),
                feedback: String::new(),
            },
        ],
        feedback: OverallFeedback::default(),
    };
    session.apply_sheet(&sheet).unwrap();
    assert_eq!(session.score(&ids[0]).unwrap().feedback, "Efficient");

    let record = session.finish(&ScoringPolicy::default()).unwrap();
    assert_eq!(record.assessment.as_deref(), Some("asm-7"));
    assert_eq!(record.graded_by, "Faculty Akash");
    assert_eq!(record.evaluation.total, 50);
    assert_eq!(record.evaluation.substituted, vec![ids[2].clone()]);
    assert_eq!(record.criteria.len(), 3);
    assert_eq!(record.criteria[0].name, "Code Efficiency");
}

#[test]
fn test_sheet_for_other_rubric_rejected() {
    let (rubric, _) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    let sheet = GradeSheet {
        rubric: Some(RubricId::new("rb-other").unwrap()),
        ..Default::default()
    };
    assert!(session.apply_sheet(&sheet).is_err());
}

#[test]
fn test_sheet_with_unknown_criterion_applies_nothing() {
    let (rubric, ids) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    let sheet = GradeSheet {
        scores: vec![
            SheetEntry {
                criterion: ids[0].clone(),
                score: Some(80.0),
                feedback: String::new(),
            },
            SheetEntry {
                criterion: CriterionId::new("cr-ghost").unwrap(),
                score: Some(10.0),
                feedback: String::new(),
            },
        ],
        ..Default::default()
    };
    assert!(session.apply_sheet(&sheet).is_err());
    assert!(session.score(&ids[0]).is_none());
}

#[test]
fn test_entries_follow_rubric_order_and_max_score() {
    let (mut rubric, ids) = lab_rubric();
    rubric.criteria[1].max_score = 20.0;
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    session.set_score(&ids[1], 10.0).unwrap();
    let entries = session.entries();
    assert_eq!(
        entries.iter().map(|e| e.criterion_id.clone()).collect::<Vec<_>>(),
        ids
    );
    assert_eq!(entries[1].max_score, 20.0);
    // 10/20 = 50% at weight 30
    assert_eq!(session.evaluate(&ScoringPolicy::default()).unwrap().total, 15);
}

#[test]
fn test_overall_feedback_reaches_record() {
    let (rubric, ids) = lab_rubric();
    let ctx = faculty();
    let mut session = GradingSession::open(&ctx, &rubric, None).unwrap();
    session.feedback_mut().strengths = "Well structured code".to_string();
    let sheet = GradeSheet {
        scores: vec![SheetEntry {
            criterion: ids[0].clone(),
            score: Some(100.0),
            feedback: String::new(),
        }],
        feedback: OverallFeedback {
            comment: "Good effort".to_string(),
            improvements: "Explain the tuning choices".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    session.apply_sheet(&sheet).unwrap();
    assert_eq!(session.feedback().comment, "Good effort");

    let record = session.finish(&ScoringPolicy::default()).unwrap();
    assert_eq!(record.feedback.comment, "Good effort");
    assert_eq!(record.feedback.strengths, "Well structured code");
    assert_eq!(record.feedback.improvements, "Explain the tuning choices");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["feedback"]["comment"], "Good effort");
}

#[test]
fn test_record_without_feedback_omits_field() {
    let (rubric, _) = lab_rubric();
    let ctx = faculty();
    let session = GradingSession::open(&ctx, &rubric, None).unwrap();
    let record = session.finish(&ScoringPolicy::default()).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("feedback").is_none());
}
