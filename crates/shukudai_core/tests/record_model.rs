use shukudai_core::{HomeworkRecord, NewHomework, RecordValidationError, Status};

fn roster() -> Vec<String> {
    vec!["Sora".to_string(), "Kokoro".to_string()]
}

fn request() -> NewHomework {
    NewHomework {
        child: "Sora".to_string(),
        content: "science workbook".to_string(),
        deadline: "2025/08/01".to_string(),
        status: 4,
        memo: String::new(),
    }
}

#[test]
fn status_accepts_the_full_completion_scale() {
    for value in 0..=10 {
        let status = Status::new(value).unwrap();
        assert_eq!(i64::from(status.value()), value);
    }
    assert!(Status::new(10).unwrap().is_done());
    assert!(!Status::new(9).unwrap().is_done());
}

#[test]
fn status_rejects_values_outside_the_scale() {
    for value in [-1, 11, 100] {
        let err = Status::new(value).unwrap_err();
        assert_eq!(err, RecordValidationError::StatusOutOfRange(value));
    }
}

#[test]
fn validate_accepts_a_well_formed_request() {
    let status = request().validate(&roster()).unwrap();
    assert_eq!(status.value(), 4);
}

#[test]
fn validate_rejects_unknown_children() {
    let mut bad = request();
    bad.child = "Mallory".to_string();
    assert_eq!(
        bad.validate(&roster()).unwrap_err(),
        RecordValidationError::UnknownChild("Mallory".to_string())
    );
}

#[test]
fn validate_rejects_non_sheet_deadline_formats() {
    for deadline in ["2025-08-01", "25/08/01", "2025/8/1", "tomorrow", ""] {
        let mut bad = request();
        bad.deadline = deadline.to_string();
        assert!(matches!(
            bad.validate(&roster()).unwrap_err(),
            RecordValidationError::BadDeadline(_)
        ));
    }
}

#[test]
fn validate_rejects_an_empty_roster() {
    assert_eq!(
        request().validate(&[]).unwrap_err(),
        RecordValidationError::EmptyRoster
    );
}

#[test]
fn empty_content_is_tolerated() {
    let mut sparse = request();
    sparse.content = String::new();
    sparse.validate(&roster()).expect("content emptiness is not enforced");
}

#[test]
fn record_serializes_with_sheet_field_names() {
    let record = HomeworkRecord {
        id: 1,
        child: "Sora".to_string(),
        content: "math".to_string(),
        deadline: "2025/08/01".to_string(),
        status: Status::new(10).unwrap(),
        memo: "done early".to_string(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["status"], 10);

    let back: HomeworkRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
    assert!(!back.is_pending());
}
