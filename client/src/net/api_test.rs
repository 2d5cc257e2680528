#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::backend::{Method, RequestBody};
use crate::net::testing::ScriptedBackend;
use crate::net::types::{ComplaintStatus, Priority, Role};

#[test]
fn decode_rejects_with_server_message_verbatim() {
    let err = decode::<Value>(json!({ "success": false, "message": "Invalid credentials" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn decode_without_success_flag_is_a_rejection() {
    let err = decode::<Value>(json!({ "message": "" })).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Request failed".to_owned()));
}

#[test]
fn decode_shape_mismatch_is_a_network_failure() {
    let err = decode::<UserDataResponse>(json!({ "success": true })).unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.user_message(), NETWORK_RETRY_MESSAGE);
}

#[test]
fn query_string_percent_encodes_values() {
    let q = query_string(&[("page", "1".to_owned()), ("search", "MG Road & co".to_owned())]);
    assert_eq!(q, "page=1&search=MG%20Road%20%26%20co");
}

#[test]
fn login_posts_credentials_as_json() {
    let backend = ScriptedBackend::new();
    backend.reply(LOGIN, json!({ "success": true }));
    block_on(login(&backend, "a@b.in", "secret")).unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].body, RequestBody::Json(json!({ "email": "a@b.in", "password": "secret" })));
}

#[test]
fn register_returns_echoed_user() {
    let backend = ScriptedBackend::new();
    backend.reply(
        REGISTER,
        json!({ "success": true, "user": { "name": "Aarti", "email": "aarti@x.in", "isAccountVerified": false } }),
    );
    let user = block_on(register(&backend, "Aarti", "aarti@x.in", "secret1")).unwrap().unwrap();
    assert_eq!(user.name, "Aarti");
    assert_eq!(user.role, Role::User);
}

#[test]
fn reset_password_sends_camel_case_field() {
    let backend = ScriptedBackend::new();
    backend.reply(RESET_PASSWORD, json!({ "success": true }));
    block_on(reset_password(&backend, "a@b.in", "123456", "newpass")).unwrap();
    assert_eq!(
        backend.requests()[0].body,
        RequestBody::Json(json!({ "email": "a@b.in", "otp": "123456", "newPassword": "newpass" }))
    );
}

#[test]
fn fetch_user_data_reads_user_data_field() {
    let backend = ScriptedBackend::new();
    backend.reply(USER_DATA, json!({ "success": true, "userData": { "name": "Raj", "role": "admin" } }));
    let user = block_on(fetch_user_data(&backend)).unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn transport_failure_surfaces_as_network_error() {
    let backend = ScriptedBackend::new();
    backend.fail(COMPLAINT_HISTORY);
    let err = block_on(complaint_history(&backend)).unwrap_err();
    assert!(err.is_network());
}

#[test]
fn upload_proof_sends_complaint_id_and_video() {
    let backend = ScriptedBackend::new();
    backend.reply(UPLOAD_PROOF, json!({ "success": true }));
    let video = Attachment::detached("cleanup.mp4", 4_000_000, "video/mp4");
    block_on(upload_proof(&backend, "c42", &video)).unwrap();

    let RequestBody::Multipart(form) = &backend.requests()[0].body else {
        panic!("expected multipart body");
    };
    assert_eq!(form.text_value("complaintId"), Some("c42"));
    assert_eq!(form.file_value("video"), Some(&video));
}

#[test]
fn admin_complaints_builds_query_and_reads_total() {
    let backend = ScriptedBackend::new();
    backend.reply(
        ADMIN_COMPLAINTS,
        json!({
            "success": true,
            "totalComplaints": 42,
            "complaints": [{
                "_id": "c1", "name": "Rohit", "phone": "1", "location": { "lat": 1.0, "lng": 2.0 },
                "status": "in-progress", "priority": "low"
            }]
        }),
    );
    let page = block_on(admin_complaints(&backend, &[("page", "2".to_owned()), ("limit", "10".to_owned())])).unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.complaints[0].status, ComplaintStatus::InProgress);
    assert_eq!(page.complaints[0].priority, Priority::Low);
    assert_eq!(backend.requests()[0].path, "/api/admin/complaints?page=2&limit=10");
}

#[test]
fn admin_users_total_defaults_to_row_count() {
    let backend = ScriptedBackend::new();
    backend.reply(ADMIN_USERS, json!({ "success": true, "users": [{ "_id": "u1", "name": "A" }] }));
    let page = block_on(admin_users(&backend, &[])).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(backend.requests()[0].path, ADMIN_USERS);
}

#[test]
fn update_complaint_puts_to_complaint_path() {
    let backend = ScriptedBackend::new();
    backend.reply("/api/admin/complaints/c9", json!({ "success": true }));
    let update = ComplaintUpdate {
        status: ComplaintStatus::Resolved,
        priority: Priority::High,
        admin_notes: Some("Cleared by ward 7".to_owned()),
    };
    block_on(update_complaint(&backend, "c9", &update)).unwrap();
    let req = &backend.requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(
        req.body,
        RequestBody::Json(json!({ "status": "resolved", "priority": "high", "adminNotes": "Cleared by ward 7" }))
    );
}

#[test]
fn deactivate_user_uses_delete() {
    let backend = ScriptedBackend::new();
    backend.reply("/api/admin/users/u7", json!({ "success": false, "message": "Cannot deactivate an admin" }));
    let err = block_on(deactivate_user(&backend, "u7")).unwrap_err();
    assert_eq!(err.user_message(), "Cannot deactivate an admin");
    assert_eq!(backend.requests()[0].method, Method::Delete);
}

#[test]
fn create_moderator_posts_role() {
    let backend = ScriptedBackend::new();
    backend.reply(ADMIN_MODERATORS, json!({ "success": true }));
    let account = NewModerator {
        name: "Mod".to_owned(),
        email: "m@x.in".to_owned(),
        password: "temp123".to_owned(),
        role: Role::Admin,
    };
    block_on(create_moderator(&backend, &account)).unwrap();
    assert_eq!(
        backend.requests()[0].body,
        RequestBody::Json(json!({ "name": "Mod", "email": "m@x.in", "password": "temp123", "role": "admin" }))
    );
}
