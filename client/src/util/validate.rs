//! Client-side field checks run before any backend call.
//!
//! ERROR HANDLING
//! ==============
//! Each check returns the first problem found as a `ValidationError` whose
//! `Display` text is the inline message shown under the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::backend::Attachment;
use crate::net::types::GeoPoint;

/// Largest accepted complaint photo.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const OTP_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please upload a photo")]
    MissingImage,
    #[error("Please select an image file")]
    NotAnImage,
    #[error("Image size should be less than 10MB")]
    ImageTooLarge,
    #[error("Please wait for location detection or enable location services")]
    MissingLocation,
    #[error("Name and phone are required")]
    MissingContact,
    #[error("All fields are required")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 6-digit OTP")]
    InvalidOtp,
    #[error("Please select a video file")]
    MissingVideo,
    #[error("No complaint selected. Open proof upload from your complaint history.")]
    MissingComplaintId,
    #[error("Please enter your email and password")]
    MissingCredentials,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Photo presence, type and size.
///
/// # Errors
///
/// `MissingImage`, `NotAnImage` or `ImageTooLarge`.
pub fn validate_image(image: Option<&Attachment>) -> Result<(), ValidationError> {
    let image = image.ok_or(ValidationError::MissingImage)?;
    if !image.is_image() {
        return Err(ValidationError::NotAnImage);
    }
    if image.size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

/// Complaint form: photo first, then location, then contact fields.
///
/// # Errors
///
/// The first failing check.
pub fn validate_complaint(
    name: &str,
    phone: &str,
    location: Option<GeoPoint>,
    image: Option<&Attachment>,
) -> Result<GeoPoint, ValidationError> {
    validate_image(image)?;
    let location = location.ok_or(ValidationError::MissingLocation)?;
    if blank(name) || blank(phone) {
        return Err(ValidationError::MissingContact);
    }
    Ok(location)
}

/// Loose email shape check; the backend is authoritative.
pub fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn validate_new_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Registration form.
///
/// # Errors
///
/// `MissingFields`, `InvalidEmail`, `PasswordMismatch` or `PasswordTooShort`.
pub fn validate_registration(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if blank(name) || blank(email) || password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_new_password(password)
}

/// # Errors
///
/// `MissingCredentials` when either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if blank(email) || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Keep only digits, at most six of them.
pub fn sanitize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

/// # Errors
///
/// `InvalidOtp` unless the code is exactly six digits.
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOtp)
    }
}

/// # Errors
///
/// `InvalidEmail` for anything that is not an address.
pub fn validate_reset_request(email: &str) -> Result<(), ValidationError> {
    if looks_like_email(email) { Ok(()) } else { Err(ValidationError::InvalidEmail) }
}

/// Second step of the password reset flow.
///
/// # Errors
///
/// `InvalidOtp`, `PasswordMismatch` or `PasswordTooShort`.
pub fn validate_password_reset(otp: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    validate_otp(otp)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_new_password(password)
}

/// Staff account creation form.
///
/// # Errors
///
/// `MissingFields`, `InvalidEmail` or `PasswordTooShort`.
pub fn validate_moderator(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    if blank(name) || blank(email) || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    validate_new_password(password)
}

/// Proof upload needs the complaint it belongs to and a video.
///
/// # Errors
///
/// `MissingComplaintId` first, then `MissingVideo`.
pub fn validate_proof<'a>(
    complaint_id: Option<&'a str>,
    video: Option<&'a Attachment>,
) -> Result<(&'a str, &'a Attachment), ValidationError> {
    let id = complaint_id.map(str::trim).filter(|id| !id.is_empty()).ok_or(ValidationError::MissingComplaintId)?;
    let video = video.filter(|v| v.is_video()).ok_or(ValidationError::MissingVideo)?;
    Ok((id, video))
}
