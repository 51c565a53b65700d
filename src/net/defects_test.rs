use super::*;
use crate::net::types::{Defect, DefectStatus, Priority};

fn defect(id: i64, status: DefectStatus) -> Defect {
    Defect {
        id,
        title: format!("defect {id}"),
        description: String::new(),
        priority: Priority::Medium,
        status,
        assignee_id: None,
        project_id: 1,
        due_date: None,
        created_at: None,
        updated_at: None,
        assignee: None,
    }
}

#[test]
fn aggregate_stats_counts_open_states_as_active() {
    let defects = [
        defect(1, DefectStatus::New),
        defect(2, DefectStatus::InProgress),
        defect(3, DefectStatus::Review),
        defect(4, DefectStatus::Closed),
        defect(5, DefectStatus::Closed),
    ];
    let stats = aggregate_stats(&defects);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.total, 5);
}

#[test]
fn aggregate_stats_counts_cancelled_in_total_only() {
    let defects = [
        defect(1, DefectStatus::Cancelled),
        defect(2, DefectStatus::New),
    ];
    let stats = aggregate_stats(&defects);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.resolved, 0);
    assert_eq!(stats.total, 2);
}

#[test]
fn aggregate_stats_of_nothing_is_zero() {
    assert_eq!(aggregate_stats(&[]), crate::net::types::DefectStats::default());
}

#[test]
fn missing_stats_endpoint_falls_back_to_aggregation() {
    let fetched = Err(ApiError::Request {
        status: 404,
        message: "not found".to_owned(),
    });
    let defects = Ok(vec![
        defect(1, DefectStatus::New),
        defect(2, DefectStatus::Closed),
        defect(3, DefectStatus::Cancelled),
    ]);
    let stats = resolve_stats(fetched, defects).expect("fallback stats");
    assert_eq!(stats.active, 1);
    assert_eq!(stats.resolved, 1);
    assert_eq!(stats.total, 3);
}

#[test]
fn stats_fetch_success_skips_the_fallback() {
    let fetched = Ok(crate::net::types::DefectStats {
        active: 2,
        resolved: 5,
        total: 8,
    });
    // The defect list result is irrelevant when the endpoint answered.
    let stats = resolve_stats(fetched, Err(ApiError::Connection)).expect("endpoint stats");
    assert_eq!(stats.total, 8);
}

#[test]
fn failed_fallback_fetch_propagates_the_list_error() {
    let fetched = Err(ApiError::Request {
        status: 500,
        message: "boom".to_owned(),
    });
    let result = resolve_stats(fetched, Err(ApiError::Connection));
    assert!(matches!(result, Err(ApiError::Connection)));
}

#[test]
fn stats_envelope_decodes_backend_shape() {
    let raw = http::RawResponse {
        status: 200,
        body: r#"{"stats":{"active":4,"resolved":9,"total":13}}"#.to_owned(),
    };
    let envelope: StatsEnvelope = http::decode(&raw).expect("stats envelope");
    assert_eq!(envelope.stats.active, 4);
    assert_eq!(envelope.stats.resolved, 9);
    assert_eq!(envelope.stats.total, 13);
}
