#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Approval workflow integration tests.
//!
//! `pending -> {approved, rejected}`, both terminal; re-processing a
//! decided request conflicts instead of overwriting.

use std::sync::Arc;

use mandap_kernel::docstore::MemoryStore;
use mandap_kernel::error::AppError;
use mandap_kernel::models::ApprovalStatus;
use mandap_kernel::services::ApprovalService;
use mandap_test_utils::approval_request;

fn service() -> ApprovalService {
    ApprovalService::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn submission_enters_pending() {
    let svc = service();

    let request = svc
        .submit(serde_json::from_value(approval_request("Blossom Decor", "hello@blossom.in")).unwrap())
        .await
        .unwrap();

    assert_eq!(request.status, ApprovalStatus::Pending);
    assert!(request.processed_at.is_none());
    assert!(request.notes.is_none());

    let pending = svc.get_pending().await.unwrap();
    assert_eq!(pending.len(), 1);
}

#[tokio::test]
async fn approval_stamps_and_persists_notes() {
    let svc = service();
    let request = svc
        .submit(serde_json::from_value(approval_request("Blossom Decor", "hello@blossom.in")).unwrap())
        .await
        .unwrap();

    let processed = svc
        .process(&request.id, true, Some("portfolio checks out".to_string()))
        .await
        .unwrap();

    assert_eq!(processed.status, ApprovalStatus::Approved);
    assert_eq!(processed.notes.as_deref(), Some("portfolio checks out"));
    assert!(processed.processed_at.is_some());
    assert!(svc.get_pending().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejection_is_also_terminal() {
    let svc = service();
    let request = svc
        .submit(serde_json::from_value(approval_request("Blossom Decor", "hello@blossom.in")).unwrap())
        .await
        .unwrap();

    let processed = svc.process(&request.id, false, None).await.unwrap();
    assert_eq!(processed.status, ApprovalStatus::Rejected);

    let err = svc.process(&request.id, true, None).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn reprocessing_an_approved_request_conflicts() {
    let svc = service();
    let request = svc
        .submit(serde_json::from_value(approval_request("Blossom Decor", "hello@blossom.in")).unwrap())
        .await
        .unwrap();

    svc.process(&request.id, true, None).await.unwrap();

    let err = svc
        .process(&request.id, false, Some("changed our mind".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // The original decision is untouched.
    let current = svc.get_by_id(&request.id).await.unwrap();
    assert_eq!(current.status, ApprovalStatus::Approved);
}

#[tokio::test]
async fn processing_a_missing_request_is_not_found() {
    let svc = service();
    let err = svc.process("missing", true, None).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn blank_submission_fields_are_rejected() {
    let svc = service();
    let err = svc
        .submit(serde_json::from_value(approval_request("", "hello@blossom.in")).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}
