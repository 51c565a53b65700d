use super::*;
use crate::net::http::RawResponse;

#[test]
fn projects_envelope_decodes_backend_shape() {
    let raw = RawResponse {
        status: 200,
        body: r#"{"projects":[{
            "id": 7,
            "name": "Harbor Bridge",
            "description": "Deck resurfacing",
            "location": "Pier 4",
            "start_date": "2026-01-05",
            "end_date": "2026-09-30",
            "status": "active",
            "manager_id": 3,
            "manager": {"id": 3, "username": "pat", "full_name": "Pat Field",
                        "email": "pat@example.com"}
        }]}"#
            .to_owned(),
    };
    let envelope: ProjectsEnvelope = http::decode(&raw).expect("projects envelope");
    assert_eq!(envelope.projects.len(), 1);
    let project = &envelope.projects[0];
    assert_eq!(project.id, 7);
    assert_eq!(project.name, "Harbor Bridge");
    assert_eq!(project.manager_id, 3);
    assert_eq!(
        project.manager.as_ref().map(|m| m.username.as_str()),
        Some("pat")
    );
    assert_eq!(project.created_at, None);
}

#[test]
fn project_envelope_decodes_single_payload() {
    let raw = RawResponse {
        status: 200,
        body: r#"{"project":{
            "id": 1,
            "name": "Depot",
            "description": "",
            "location": "Yard",
            "start_date": "2026-02-01",
            "end_date": "2026-03-01",
            "status": "planned",
            "manager_id": 2
        }}"#
        .to_owned(),
    };
    let envelope: ProjectEnvelope = http::decode(&raw).expect("project envelope");
    assert_eq!(envelope.project.name, "Depot");
    assert_eq!(envelope.project.manager, None);
}
