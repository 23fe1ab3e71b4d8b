use studylog_core::{parse_duration_input, InMemoryStudyLog, Record, RecordValidationError};

#[test]
fn count_and_total_track_every_add() {
    let mut service = InMemoryStudyLog::default();
    let durations = [25_u64, 60, 5, 90, 1];

    for (index, minutes) in durations.iter().enumerate() {
        service
            .add(format!("subject-{index}"), "topic", *minutes)
            .unwrap();
        assert_eq!(service.count(), index + 1);
    }

    let expected: u64 = durations.iter().sum();
    assert_eq!(service.total_duration(), expected);
    assert_eq!(service.records().last().unwrap().duration_minutes(), 1);
}

#[test]
fn rejected_durations_leave_store_unchanged() {
    let mut service = InMemoryStudyLog::default();
    service.add("Math", "Limits", 10).unwrap();

    let err = service.add("Math", "Limits", 0).unwrap_err();
    assert_eq!(err, RecordValidationError::NonPositiveDuration);

    for raw in ["0", "-5", "abc", "4.5", "", "  "] {
        assert!(parse_duration_input(raw).is_err(), "`{raw}` should be rejected");
    }

    assert_eq!(service.count(), 1);
    assert_eq!(service.total_duration(), 10);
}

#[test]
fn filter_is_case_insensitive_and_order_preserving() {
    let mut service = InMemoryStudyLog::default();
    service.add("Math", "first", 10).unwrap();
    service.add("Physics", "skip", 20).unwrap();
    service.add("math", "second", 30).unwrap();

    let matches = service.filter_by_subject("MATH");
    let topics: Vec<&str> = matches.iter().map(Record::topic).collect();
    assert_eq!(topics, vec!["first", "second"]);
}

#[test]
fn math_and_physics_scenario() {
    let mut service = InMemoryStudyLog::default();
    service.add("Math", "Integrals", 60).unwrap();
    service.add("Physics", "Kinematics", 45).unwrap();

    assert_eq!(service.total_duration(), 105);

    let matches = service.filter_by_subject("math");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].topic(), "Integrals");
    assert_eq!(matches[0].duration_minutes(), 60);
}

#[test]
fn filter_without_matches_is_empty_not_error() {
    let mut service = InMemoryStudyLog::default();
    service.add("Math", "Integrals", 60).unwrap();
    assert!(service.filter_by_subject("History").is_empty());
}

#[test]
fn duplicate_records_are_kept() {
    let mut service = InMemoryStudyLog::default();
    service.add("Math", "Integrals", 60).unwrap();
    service.add("Math", "Integrals", 60).unwrap();
    assert_eq!(service.count(), 2);
}

#[test]
fn record_serialization_uses_field_names_and_validates() {
    let record = Record::new("Biology", "Cells", 40).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["subject"], "Biology");
    assert_eq!(json["topic"], "Cells");
    assert_eq!(json["duration_minutes"], 40);

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);

    let invalid = serde_json::json!({
        "subject": "Biology",
        "topic": "Cells",
        "duration_minutes": 0
    });
    let err = serde_json::from_value::<Record>(invalid).unwrap_err();
    assert!(
        err.to_string().contains("duration_minutes must be > 0"),
        "unexpected error: {err}"
    );
}
