#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn multipart_form_keeps_field_order() {
    let form = MultipartForm::new()
        .file("image", Attachment::detached("bin.jpg", 2048, "image/jpeg"))
        .text("name", "Rohit")
        .text("phone", "9876543210");
    let names: Vec<&str> = form.parts.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["image", "name", "phone"]);
}

#[test]
fn multipart_lookups_distinguish_text_and_file_fields() {
    let form = MultipartForm::new()
        .text("complaintId", "c1")
        .file("video", Attachment::detached("proof.mp4", 10, "video/mp4"));
    assert_eq!(form.text_value("complaintId"), Some("c1"));
    assert_eq!(form.text_value("video"), None);
    assert_eq!(form.file_value("video").map(|a| a.name.as_str()), Some("proof.mp4"));
    assert!(form.file_value("complaintId").is_none());
}

#[test]
fn attachment_kind_follows_content_type() {
    let image = Attachment::detached("a.png", 1, "image/png");
    let video = Attachment::detached("a.webm", 1, "video/webm");
    assert!(image.is_image() && !image.is_video());
    assert!(video.is_video() && !video.is_image());
}

#[test]
fn request_route_strips_query() {
    let req = ApiRequest::get("/api/admin/complaints?page=1&limit=5");
    assert_eq!(req.route(), "/api/admin/complaints");
    assert_eq!(ApiRequest::post("/api/auth/logout").route(), "/api/auth/logout");
}

#[test]
fn constructors_pick_method_and_body() {
    assert_eq!(ApiRequest::delete("/x").method, Method::Delete);
    let put = ApiRequest::put_json("/x", serde_json::json!({ "a": 1 }));
    assert_eq!(put.method, Method::Put);
    assert_eq!(put.body, RequestBody::Json(serde_json::json!({ "a": 1 })));
    let multi = ApiRequest::multipart("/x", MultipartForm::new());
    assert_eq!(multi.method, Method::Post);
    assert!(matches!(multi.body, RequestBody::Multipart(_)));
}

#[test]
fn http_backend_reports_network_failure_off_browser() {
    let backend = HttpBackend::new(ClientConfig::default());
    let result = futures::executor::block_on(backend.send(ApiRequest::get("/api/auth/is-auth")));
    assert!(matches!(result, Err(ApiError::Network(_))));
}
