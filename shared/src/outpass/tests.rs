use super::*;
use serde_json::{Value, json};

fn record(overrides: Value) -> OutpassRequest {
    let mut base = json!({
        "_id": "op-1",
        "studentId": "stu-9",
        "studentname": "Asha",
        "fromDate": "2024-03-01T09:00:00Z",
        "toDate": "2024-03-02T18:00:00Z",
        "reason": "Family function",
        "status": "pending",
        "createdAt": "2024-02-28T08:00:00Z",
        "updatedAt": "2024-02-29T12:30:00Z"
    });
    if let (Some(base), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }
    let raw: RawOutpass = serde_json::from_value(base).expect("valid record");
    raw.into()
}

#[test]
fn hostel_request_renders_three_blocks() {
    let req = record(json!({ "residencetype": "hostel", "wardenapprovalstatus": "pending" }));
    let roles: Vec<_> = req.approval_blocks().iter().map(|b| b.role).collect();
    assert_eq!(
        roles,
        vec![ApproverRole::Staff, ApproverRole::YearIncharge, ApproverRole::Warden]
    );
}

#[test]
fn day_scholar_request_omits_warden_block() {
    let req = record(json!({ "residencetype": "day scholar", "wardenapprovalstatus": "pending" }));
    let blocks = req.approval_blocks();
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.role != ApproverRole::Warden));
}

#[test]
fn residency_match_ignores_case_and_spaces() {
    assert_eq!(Residency::from_raw(" HOSTEL "), Residency::Hostel);
    assert_eq!(Residency::from_raw("Hos tel"), Residency::Hostel);
    assert_eq!(Residency::from_raw("dayscholar"), Residency::DayScholar);
    let req = record(json!({}));
    assert_eq!(req.residency, Residency::DayScholar);
}

#[test]
fn rejected_at_is_derived_from_updated_at() {
    let req = record(json!({
        "staffapprovalstatus": "rejected",
        "staffremarks": "Exams this week",
        "yearinchargeapprovalstatus": "approved",
        "yearinchargeapprovedat": "2024-02-29T10:00:00Z"
    }));
    assert_eq!(req.staff_approval.status, ApprovalStatus::Rejected);
    assert_eq!(req.staff_approval.rejected_at, req.updated_at);
    assert!(req.staff_approval.rejected_at.is_some());
    assert_eq!(req.year_incharge_approval.rejected_at, None);
    assert!(req.year_incharge_approval.approved_at.is_some());
}

#[test]
fn missing_status_defaults_to_pending() {
    let req = record(json!({ "staffapprovalstatus": "" }));
    assert_eq!(req.staff_approval.status, ApprovalStatus::Pending);
    assert_eq!(req.year_incharge_approval.status, ApprovalStatus::Pending);
    assert_eq!(req.staff_approval.approver_name, None);
}

#[test]
fn badge_mapping_is_fixed() {
    assert_eq!(BadgeTone::for_status("pending"), BadgeTone::Amber);
    assert_eq!(BadgeTone::for_status("approved"), BadgeTone::Green);
    assert_eq!(BadgeTone::for_status("rejected"), BadgeTone::Red);
    assert_eq!(BadgeTone::for_status("declined"), BadgeTone::Red);
    assert_eq!(BadgeTone::for_status("escalated"), BadgeTone::Amber);
}

#[test]
fn missing_required_field_fails_to_parse() {
    let result: Result<RawOutpass, _> = serde_json::from_value(json!({
        "_id": "op-1",
        "studentname": "Asha",
        "fromDate": "2024-03-01",
        "toDate": "2024-03-02",
        "reason": "x"
    }));
    assert!(result.is_err());
}

#[test]
fn record_with_both_id_keys_prefers_id() {
    let req = record(json!({ "_id": "64f0c2", "id": "op-7" }));
    assert_eq!(req.id, "op-7");

    let req = record(json!({ "id": "op-7" }));
    assert_eq!(req.id, "op-7");

    let req = record(json!({}));
    assert_eq!(req.id, "op-1");
}

#[test]
fn record_without_any_id_fails_to_parse() {
    let result: Result<RawOutpass, _> = serde_json::from_value(json!({
        "studentId": "stu-9",
        "studentname": "Asha",
        "fromDate": "2024-03-01",
        "toDate": "2024-03-02",
        "reason": "x"
    }));
    assert!(result.is_err());
}

#[test]
fn summary_counts_overall_status() {
    let list = vec![
        record(json!({ "status": "approved" })),
        record(json!({ "status": "Rejected" })),
        record(json!({ "status": "pending" })),
        record(json!({ "status": "forwarded" })),
    ];
    let summary = StatusSummary::from_requests(&list);
    assert_eq!(
        summary,
        StatusSummary { pending: 2, approved: 1, rejected: 1 }
    );
    assert_eq!(summary.total(), 4);
}
