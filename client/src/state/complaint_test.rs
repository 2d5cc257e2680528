#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::api::{SUBMIT_COMPLAINT, UPLOAD_PROOF};
use crate::net::backend::{Method, RequestBody};
use crate::net::testing::ScriptedBackend;
use crate::net::types::ComplaintStatus;

fn photo() -> Attachment {
    Attachment::detached("garbage.jpg", 350_000, "image/jpeg")
}

fn valid_draft() -> ComplaintDraft {
    ComplaintDraft {
        name: "Rohit".to_owned(),
        phone: "9876543210".to_owned(),
        address: String::new(),
        location: Some(GeoPoint { lat: 28.6, lng: 77.2 }),
        image: Some(photo()),
    }
}

#[test]
fn valid_complaint_is_one_multipart_post() {
    let backend = ScriptedBackend::new();
    backend.reply(SUBMIT_COMPLAINT, json!({ "success": true, "message": "Complaint submitted" }));

    block_on(submit_complaint_draft(&backend, &valid_draft())).unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, SUBMIT_COMPLAINT);
    let RequestBody::Multipart(form) = &requests[0].body else {
        panic!("expected multipart body");
    };
    assert_eq!(form.text_value("name"), Some("Rohit"));
    assert_eq!(form.text_value("phone"), Some("9876543210"));
    assert_eq!(form.text_value("lat"), Some("28.6"));
    assert_eq!(form.text_value("lng"), Some("77.2"));
    assert_eq!(form.text_value("address"), Some(""));
    assert_eq!(form.file_value("image"), Some(&photo()));
}

#[test]
fn missing_location_makes_no_network_call() {
    let backend = ScriptedBackend::new();
    let draft = ComplaintDraft { location: None, ..valid_draft() };

    let err = block_on(submit_complaint_draft(&backend, &draft)).unwrap_err();

    assert_eq!(err, FormError::Validation(ValidationError::MissingLocation));
    assert!(backend.requests().is_empty());
}

#[test]
fn missing_image_makes_no_network_call() {
    let backend = ScriptedBackend::new();
    let draft = ComplaintDraft { image: None, ..valid_draft() };

    let err = block_on(submit_complaint_draft(&backend, &draft)).unwrap_err();

    assert_eq!(err.user_message(), "Please upload a photo");
    assert!(backend.requests().is_empty());
}

#[test]
fn backend_rejection_is_reported_verbatim() {
    let backend = ScriptedBackend::new();
    backend.reply(SUBMIT_COMPLAINT, json!({ "success": false, "message": "Image upload failed" }));

    let err = block_on(submit_complaint_draft(&backend, &valid_draft())).unwrap_err();

    assert_eq!(err.user_message(), "Image upload failed");
}

#[test]
fn draft_fields_are_trimmed() {
    let draft = ComplaintDraft {
        name: "  Rohit ".to_owned(),
        address: " Sector 5 ".to_owned(),
        ..valid_draft()
    };
    let submission = draft.to_submission().unwrap();
    assert_eq!(submission.name, "Rohit");
    assert_eq!(submission.address, "Sector 5");
}

#[test]
fn proof_without_complaint_id_is_blocked_locally() {
    let backend = ScriptedBackend::new();
    let video = Attachment::detached("after.mp4", 1_000, "video/mp4");

    let err = block_on(upload_proof_draft(&backend, None, Some(&video))).unwrap_err();

    assert_eq!(err, FormError::Validation(ValidationError::MissingComplaintId));
    assert!(backend.requests().is_empty());
}

#[test]
fn proof_upload_posts_video() {
    let backend = ScriptedBackend::new();
    backend.reply(UPLOAD_PROOF, json!({ "success": true }));
    let video = Attachment::detached("after.mp4", 1_000, "video/mp4");

    block_on(upload_proof_draft(&backend, Some("c7"), Some(&video))).unwrap();

    assert_eq!(backend.routes(), [UPLOAD_PROOF]);
}

#[test]
fn proof_upload_network_failure_prompts_retry() {
    let backend = ScriptedBackend::new();
    backend.fail(UPLOAD_PROOF);
    let video = Attachment::detached("after.mp4", 1_000, "video/mp4");

    let err = block_on(upload_proof_draft(&backend, Some("c7"), Some(&video))).unwrap_err();

    assert_eq!(err.user_message(), crate::net::api::NETWORK_RETRY_MESSAGE);
}

#[test]
fn past_complaints_keeps_terminal_states() {
    let base: Complaint = serde_json::from_value(json!({
        "_id": "c1", "name": "R", "phone": "1", "location": { "lat": 0.0, "lng": 0.0 }
    }))
    .unwrap();
    let all: Vec<Complaint> = ComplaintStatus::ALL
        .iter()
        .map(|s| Complaint { status: *s, ..base.clone() })
        .collect();
    let past: Vec<ComplaintStatus> = past_complaints(&all).iter().map(|c| c.status).collect();
    assert_eq!(past, [ComplaintStatus::Resolved, ComplaintStatus::Rejected]);
}
