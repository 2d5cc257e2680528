#![cfg(not(feature = "hydrate"))]

use super::*;

fn photo(size: u64) -> Attachment {
    Attachment::detached("pile.jpg", size, "image/jpeg")
}

const DELHI: GeoPoint = GeoPoint { lat: 28.6, lng: 77.2 };

#[test]
fn complaint_requires_image_before_anything_else() {
    let err = validate_complaint("", "", None, None).unwrap_err();
    assert_eq!(err, ValidationError::MissingImage);
    assert_eq!(err.to_string(), "Please upload a photo");
}

#[test]
fn complaint_requires_location_after_image() {
    let image = photo(1024);
    let err = validate_complaint("Rohit", "9876543210", None, Some(&image)).unwrap_err();
    assert_eq!(err, ValidationError::MissingLocation);
}

#[test]
fn complaint_requires_name_and_phone() {
    let image = photo(1024);
    assert_eq!(
        validate_complaint("  ", "9876543210", Some(DELHI), Some(&image)),
        Err(ValidationError::MissingContact)
    );
    assert_eq!(validate_complaint("Rohit", "", Some(DELHI), Some(&image)), Err(ValidationError::MissingContact));
}

#[test]
fn complaint_accepts_valid_input_and_returns_location() {
    let image = photo(1024);
    assert_eq!(validate_complaint("Rohit", "9876543210", Some(DELHI), Some(&image)), Ok(DELHI));
}

#[test]
fn image_size_limit_is_inclusive() {
    assert!(validate_image(Some(&photo(MAX_IMAGE_BYTES))).is_ok());
    assert_eq!(validate_image(Some(&photo(MAX_IMAGE_BYTES + 1))), Err(ValidationError::ImageTooLarge));
}

#[test]
fn image_rejects_non_image_files() {
    let pdf = Attachment::detached("notes.pdf", 10, "application/pdf");
    assert_eq!(validate_image(Some(&pdf)), Err(ValidationError::NotAnImage));
}

#[test]
fn registration_checks_in_order() {
    assert_eq!(validate_registration("", "a@b.in", "secret", "secret"), Err(ValidationError::MissingFields));
    assert_eq!(validate_registration("A", "nope", "secret", "secret"), Err(ValidationError::InvalidEmail));
    assert_eq!(validate_registration("A", "a@b.in", "secret", "secreT"), Err(ValidationError::PasswordMismatch));
    assert_eq!(validate_registration("A", "a@b.in", "12345", "12345"), Err(ValidationError::PasswordTooShort));
    assert_eq!(validate_registration("A", "a@b.in", "123456", "123456"), Ok(()));
}

#[test]
fn email_shape_check() {
    assert!(looks_like_email("rohit@example.in"));
    assert!(!looks_like_email("@example.in"));
    assert!(!looks_like_email("rohit@"));
    assert!(!looks_like_email("a@b@c"));
}

#[test]
fn otp_input_keeps_six_digits() {
    assert_eq!(sanitize_otp_input("12a3-45 678"), "123456");
    assert_eq!(sanitize_otp_input("abc"), "");
}

#[test]
fn otp_must_be_exactly_six_digits() {
    assert!(validate_otp("123456").is_ok());
    assert_eq!(validate_otp("12345"), Err(ValidationError::InvalidOtp));
    assert_eq!(validate_otp("12345a"), Err(ValidationError::InvalidOtp));
}

#[test]
fn login_needs_both_fields() {
    assert_eq!(validate_login("", "x"), Err(ValidationError::MissingCredentials));
    assert_eq!(validate_login("a@b.in", ""), Err(ValidationError::MissingCredentials));
    assert!(validate_login("a@b.in", "x").is_ok());
}

#[test]
fn password_reset_checks_otp_then_passwords() {
    assert_eq!(validate_password_reset("12", "secret1", "secret1"), Err(ValidationError::InvalidOtp));
    assert_eq!(validate_password_reset("123456", "secret1", "secret2"), Err(ValidationError::PasswordMismatch));
    assert_eq!(validate_password_reset("123456", "abc", "abc"), Err(ValidationError::PasswordTooShort));
    assert!(validate_password_reset("123456", "secret1", "secret1").is_ok());
    assert_eq!(validate_reset_request("x"), Err(ValidationError::InvalidEmail));
}

#[test]
fn moderator_form_checks() {
    assert_eq!(validate_moderator("", "m@x.in", "secret"), Err(ValidationError::MissingFields));
    assert_eq!(validate_moderator("M", "mx.in", "secret"), Err(ValidationError::InvalidEmail));
    assert!(validate_moderator("M", "m@x.in", "secret").is_ok());
}

#[test]
fn proof_requires_complaint_id_before_video() {
    let video = Attachment::detached("proof.mp4", 10, "video/mp4");
    assert_eq!(validate_proof(None, Some(&video)), Err(ValidationError::MissingComplaintId));
    assert_eq!(validate_proof(Some(" "), None), Err(ValidationError::MissingComplaintId));
    assert_eq!(validate_proof(Some("c1"), None), Err(ValidationError::MissingVideo));
    let (id, picked) = validate_proof(Some("c1"), Some(&video)).unwrap();
    assert_eq!(id, "c1");
    assert_eq!(picked, &video);
}

#[test]
fn proof_rejects_non_video_files() {
    let image = photo(10);
    assert_eq!(validate_proof(Some("c1"), Some(&image)), Err(ValidationError::MissingVideo));
}
