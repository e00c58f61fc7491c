use herhealth_audit::events::{AuditEvent, AuditOutcome};

#[test]
fn builder_fills_optional_fields() {
    let event = AuditEvent::new("assessment.submit", "health_assessment", "pcos", AuditOutcome::Failed)
        .with_user("user-1")
        .with_details(serde_json::json!({"reason": "timeout"}));

    assert_eq!(event.user_id.as_deref(), Some("user-1"));
    assert_eq!(event.details.as_ref().unwrap()["reason"], "timeout");

    // No subscriber installed; emitting must still be a no-op rather than a panic.
    event.emit();
}

#[test]
fn serializes_outcome_in_snake_case() {
    let event = AuditEvent::new("assessment.submit", "health_assessment", "menstrual", AuditOutcome::Skipped);
    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["outcome"], "skipped");
    assert!(value["user_id"].is_null());
}
