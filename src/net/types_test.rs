use super::*;

#[test]
fn role_serializes_lowercase() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).expect("role json");
        assert_eq!(json, format!("\"{}\"", role.as_str()));
    }
}

#[test]
fn unknown_role_fails_deserialization() {
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn role_parse_round_trips_wire_names() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn defect_status_uses_snake_case_wire_names() {
    for status in DefectStatus::ALL {
        let json = serde_json::to_string(&status).expect("status json");
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
}

#[test]
fn active_statuses_are_new_in_progress_review() {
    assert!(DefectStatus::New.is_active());
    assert!(DefectStatus::InProgress.is_active());
    assert!(DefectStatus::Review.is_active());
    assert!(!DefectStatus::Closed.is_active());
    assert!(!DefectStatus::Cancelled.is_active());
}

#[test]
fn defect_decodes_with_optional_fields_missing() {
    let defect: Defect = serde_json::from_str(
        r#"{
            "id": 5,
            "title": "Crack in load-bearing wall",
            "description": "Found during inspection",
            "priority": "high",
            "status": "in_progress",
            "project_id": 2
        }"#,
    )
    .expect("defect");
    assert_eq!(defect.status, DefectStatus::InProgress);
    assert!(defect.assignee.is_none());
    assert!(defect.due_date.is_none());
}

#[test]
fn project_update_serializes_only_set_fields() {
    let update = ProjectUpdate {
        status: Some("completed".to_owned()),
        ..ProjectUpdate::default()
    };
    let json = serde_json::to_value(&update).expect("update json");
    assert_eq!(json, serde_json::json!({ "status": "completed" }));
}

#[test]
fn display_name_prefers_full_name() {
    let mut user: User = serde_json::from_str(
        r#"{"id":1,"username":"ivanov","email":"i@example.com","full_name":"Ivan Ivanov","role":"engineer"}"#,
    )
    .expect("user");
    assert_eq!(user.display_name(), "Ivan Ivanov");

    user.full_name = None;
    assert_eq!(user.display_name(), "ivanov");
}
