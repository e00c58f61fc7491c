use std::collections::BTreeMap;

use herhealth_core::error::CoreError;
use herhealth_core::keys;
use herhealth_core::models::assessment::{AssessmentRecord, AssessmentType, SeverityLevel};

#[test]
fn assessment_type_parses_its_own_display() {
    for kind in AssessmentType::ALL {
        assert_eq!(kind.to_string().parse::<AssessmentType>().unwrap(), kind);
    }
    assert!("thyroid".parse::<AssessmentType>().is_err());
}

#[test]
fn severity_level_serializes_lowercase() {
    let json = serde_json::to_string(&SeverityLevel::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
    assert_eq!("high".parse::<SeverityLevel>().unwrap(), SeverityLevel::High);
}

#[test]
fn record_serializes_table_field_names() {
    let mut responses = BTreeMap::new();
    responses.insert("1".to_string(), 2);
    responses.insert("2".to_string(), 0);

    let record = AssessmentRecord::new("user-1", AssessmentType::Pcos, 10, SeverityLevel::Low, responses);
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["user_id"], "user-1");
    assert_eq!(value["assessment_type"], "pcos");
    assert_eq!(value["risk_score"], 10);
    assert_eq!(value["risk_category"], "low");
    assert_eq!(value["responses"]["1"], 2);

    let back: AssessmentRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn assessment_key_nests_under_user_prefix() {
    let record = AssessmentRecord::new(
        "abc",
        AssessmentType::Menopause,
        50,
        SeverityLevel::Medium,
        BTreeMap::new(),
    );
    let key = keys::assessment(&record.user_id, record.assessment_type, record.id).unwrap();

    assert!(key.starts_with(&keys::user_assessments_prefix("abc").unwrap()));
    assert!(key.contains("/menopause/"));
    assert!(key.ends_with(".json"));
}

#[test]
fn user_ids_that_leave_their_segment_are_rejected() {
    for user_id in ["", ".", "..", "../../escaped", "a/b", "a\\b", "nul\0"] {
        assert!(
            matches!(keys::check_user_id(user_id), Err(CoreError::InvalidUserId(_))),
            "{user_id:?} should be rejected"
        );
        assert!(keys::user_assessments_prefix(user_id).is_err());
    }

    assert!(keys::check_user_id("user-7").is_ok());
    assert!(keys::check_user_id("..hidden").is_ok());
    assert!(keys::assessment("8f1c2a", AssessmentType::Pcos, uuid::Uuid::new_v4()).is_ok());
}
