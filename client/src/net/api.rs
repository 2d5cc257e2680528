//! Typed REST calls against the Clean India backend.
//!
//! Every helper builds one `ApiRequest`, sends it through a `Backend` and
//! decodes the `{ success, message, ... }` envelope the backend wraps around
//! every response.
//!
//! ERROR HANDLING
//! ==============
//! `success: false` becomes `ApiError::Rejected` carrying the server message
//! verbatim. Transport and parse failures become `ApiError::Network`. Callers
//! never see panics; pages turn either variant into an inline message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::backend::{ApiRequest, Attachment, Backend, MultipartForm};
use super::types::{
    Complaint, ComplaintPage, ComplaintUpdate, DashboardStats, GeoPoint, ManagedUser, Moderator, NewModerator, User,
    UserPage,
};

pub const IS_AUTH: &str = "/api/auth/is-auth";
pub const LOGIN: &str = "/api/auth/login";
pub const REGISTER: &str = "/api/auth/register";
pub const LOGOUT: &str = "/api/auth/logout";
pub const SEND_VERIFY_OTP: &str = "/api/auth/send-verify-otp";
pub const VERIFY_ACCOUNT: &str = "/api/auth/verify-account";
pub const SEND_RESET_OTP: &str = "/api/auth/send-reset-otp";
pub const RESET_PASSWORD: &str = "/api/auth/reset-password";
pub const USER_DATA: &str = "/api/user/data";
pub const SUBMIT_COMPLAINT: &str = "/api/complaints/submit";
pub const COMPLAINT_HISTORY: &str = "/api/complaints/history";
pub const UPLOAD_PROOF: &str = "/api/complaints/upload-proof";
pub const DASHBOARD_STATS: &str = "/api/admin/dashboard/stats";
pub const ADMIN_COMPLAINTS: &str = "/api/admin/complaints";
pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_MODERATORS: &str = "/api/admin/moderators";

pub const NETWORK_RETRY_MESSAGE: &str = "Network error. Please try again.";
const DEFAULT_REJECTION: &str = "Request failed";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// No usable response: transport error or unparseable body.
    #[error("network failure: {0}")]
    Network(String),
}

impl ApiError {
    /// Text shown to the user: the server's own words, or a retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Network(_) => NETWORK_RETRY_MESSAGE.to_owned(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Interpret the backend envelope and deserialize its payload.
///
/// # Errors
///
/// `Rejected` when `success` is not `true`, `Network` when the payload does
/// not match `T`.
pub fn decode<T: DeserializeOwned>(envelope: Value) -> Result<T, ApiError> {
    let success = envelope.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let message = envelope
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTION);
        return Err(ApiError::Rejected(message.to_owned()));
    }
    serde_json::from_value(envelope).map_err(|e| ApiError::Network(format!("unexpected response shape: {e}")))
}

/// Envelope with no payload beyond `success`.
#[derive(Debug, Deserialize)]
struct Ack {}

async fn ack<B: Backend>(backend: &B, request: ApiRequest) -> Result<(), ApiError> {
    let _: Ack = decode(backend.send(request).await?)?;
    Ok(())
}

/// Encode `(key, value)` pairs as a URL query string.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() { path.to_owned() } else { format!("{path}?{}", query_string(pairs)) }
}

// =============================================================================
// AUTH
// =============================================================================

/// Probe `GET /api/auth/is-auth`. `Ok` means the session cookie is valid.
///
/// # Errors
///
/// `Rejected` when the backend reports no session.
pub async fn is_authenticated<B: Backend>(backend: &B) -> Result<(), ApiError> {
    ack(backend, ApiRequest::get(IS_AUTH)).await
}

/// Credential login via `POST /api/auth/login`.
///
/// # Errors
///
/// `Rejected` with the server message (e.g. invalid credentials).
pub async fn login<B: Backend>(backend: &B, email: &str, password: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "email": email, "password": password });
    ack(backend, ApiRequest::post_json(LOGIN, body)).await
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    user: Option<User>,
}

/// Create an account via `POST /api/auth/register`.
///
/// Returns the user record echoed by the backend, when present.
///
/// # Errors
///
/// `Rejected` when the backend refuses the registration.
pub async fn register<B: Backend>(backend: &B, name: &str, email: &str, password: &str) -> Result<Option<User>, ApiError> {
    let body = serde_json::json!({ "name": name, "email": email, "password": password });
    let resp: RegisterResponse = decode(backend.send(ApiRequest::post_json(REGISTER, body)).await?)?;
    Ok(resp.user)
}

/// End the server-side session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Any failure; callers treat logout as best effort.
pub async fn logout<B: Backend>(backend: &B) -> Result<(), ApiError> {
    ack(backend, ApiRequest::post(LOGOUT)).await
}

/// Ask the backend to email an account verification OTP.
///
/// # Errors
///
/// `Rejected` when the account is already verified or mail delivery failed.
pub async fn send_verify_otp<B: Backend>(backend: &B) -> Result<(), ApiError> {
    ack(backend, ApiRequest::post(SEND_VERIFY_OTP)).await
}

/// Submit the emailed OTP via `POST /api/auth/verify-account`.
///
/// # Errors
///
/// `Rejected` for a wrong or expired code.
pub async fn verify_account<B: Backend>(backend: &B, otp: &str) -> Result<(), ApiError> {
    ack(backend, ApiRequest::post_json(VERIFY_ACCOUNT, serde_json::json!({ "otp": otp }))).await
}

/// Ask the backend to email a password reset OTP.
///
/// # Errors
///
/// `Rejected` when no account matches `email`.
pub async fn send_reset_otp<B: Backend>(backend: &B, email: &str) -> Result<(), ApiError> {
    ack(backend, ApiRequest::post_json(SEND_RESET_OTP, serde_json::json!({ "email": email }))).await
}

/// Apply a new password using the reset OTP.
///
/// # Errors
///
/// `Rejected` for a wrong or expired code.
pub async fn reset_password<B: Backend>(
    backend: &B,
    email: &str,
    otp: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    let body = serde_json::json!({ "email": email, "otp": otp, "newPassword": new_password });
    ack(backend, ApiRequest::post_json(RESET_PASSWORD, body)).await
}

#[derive(Debug, Deserialize)]
struct UserDataResponse {
    #[serde(rename = "userData")]
    user_data: User,
}

/// Fetch the signed-in user's profile from `GET /api/user/data`.
///
/// # Errors
///
/// `Rejected` without a session, `Network` on transport failure.
pub async fn fetch_user_data<B: Backend>(backend: &B) -> Result<User, ApiError> {
    let resp: UserDataResponse = decode(backend.send(ApiRequest::get(USER_DATA)).await?)?;
    Ok(resp.user_data)
}

// =============================================================================
// COMPLAINTS
// =============================================================================

/// A complaint that passed local validation and is ready to upload.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplaintSubmission {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub location: GeoPoint,
    pub image: Attachment,
}

impl ComplaintSubmission {
    /// Multipart body with the field names the backend expects.
    pub fn to_form(&self) -> MultipartForm {
        MultipartForm::new()
            .file("image", self.image.clone())
            .text("name", self.name.as_str())
            .text("phone", self.phone.as_str())
            .text("lat", self.location.lat.to_string())
            .text("lng", self.location.lng.to_string())
            .text("address", self.address.as_str())
    }
}

/// Upload a new complaint via multipart `POST /api/complaints/submit`.
///
/// # Errors
///
/// `Rejected` with the server message, `Network` on transport failure.
pub async fn submit_complaint<B: Backend>(backend: &B, submission: &ComplaintSubmission) -> Result<(), ApiError> {
    ack(backend, ApiRequest::multipart(SUBMIT_COMPLAINT, submission.to_form())).await
}

#[derive(Debug, Deserialize)]
struct ComplaintsResponse {
    #[serde(default)]
    complaints: Vec<Complaint>,
    #[serde(default, rename = "totalComplaints")]
    total_complaints: Option<u64>,
}

/// The caller's own complaints from `GET /api/complaints/history`.
///
/// # Errors
///
/// `Rejected` without a session, `Network` on transport failure.
pub async fn complaint_history<B: Backend>(backend: &B) -> Result<Vec<Complaint>, ApiError> {
    let resp: ComplaintsResponse = decode(backend.send(ApiRequest::get(COMPLAINT_HISTORY)).await?)?;
    Ok(resp.complaints)
}

/// Attach a cleanup video via multipart `POST /api/complaints/upload-proof`.
///
/// # Errors
///
/// `Rejected` when the complaint is unknown or not eligible.
pub async fn upload_proof<B: Backend>(backend: &B, complaint_id: &str, video: &Attachment) -> Result<(), ApiError> {
    let form = MultipartForm::new().text("complaintId", complaint_id).file("video", video.clone());
    ack(backend, ApiRequest::multipart(UPLOAD_PROOF, form)).await
}

// =============================================================================
// ADMIN
// =============================================================================

#[derive(Debug, Deserialize)]
struct StatsResponse {
    stats: DashboardStats,
}

/// Aggregate counters from `GET /api/admin/dashboard/stats`.
///
/// # Errors
///
/// `Rejected` for non-staff sessions.
pub async fn dashboard_stats<B: Backend>(backend: &B) -> Result<DashboardStats, ApiError> {
    let resp: StatsResponse = decode(backend.send(ApiRequest::get(DASHBOARD_STATS)).await?)?;
    Ok(resp.stats)
}

/// Filtered, paginated complaints from `GET /api/admin/complaints`.
///
/// `query` is the already-encoded parameter list (see `state::admin`).
///
/// # Errors
///
/// `Rejected` for non-staff sessions.
pub async fn admin_complaints<B: Backend>(backend: &B, query: &[(&str, String)]) -> Result<ComplaintPage, ApiError> {
    let resp: ComplaintsResponse =
        decode(backend.send(ApiRequest::get(with_query(ADMIN_COMPLAINTS, query))).await?)?;
    let total = resp.total_complaints.unwrap_or(resp.complaints.len() as u64);
    Ok(ComplaintPage { complaints: resp.complaints, total })
}

/// Change status, priority and notes via `PUT /api/admin/complaints/{id}`.
///
/// # Errors
///
/// `Rejected` with the server message.
pub async fn update_complaint<B: Backend>(backend: &B, id: &str, update: &ComplaintUpdate) -> Result<(), ApiError> {
    let body = serde_json::to_value(update).map_err(|e| ApiError::Network(e.to_string()))?;
    ack(backend, ApiRequest::put_json(format!("{ADMIN_COMPLAINTS}/{id}"), body)).await
}

#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<ManagedUser>,
    #[serde(default, rename = "totalUsers")]
    total_users: Option<u64>,
}

/// Paginated user search from `GET /api/admin/users`.
///
/// # Errors
///
/// `Rejected` for non-staff sessions.
pub async fn admin_users<B: Backend>(backend: &B, query: &[(&str, String)]) -> Result<UserPage, ApiError> {
    let resp: UsersResponse = decode(backend.send(ApiRequest::get(with_query(ADMIN_USERS, query))).await?)?;
    let total = resp.total_users.unwrap_or(resp.users.len() as u64);
    Ok(UserPage { users: resp.users, total })
}

/// Deactivate an account via `DELETE /api/admin/users/{id}`.
///
/// # Errors
///
/// `Rejected` with the server message.
pub async fn deactivate_user<B: Backend>(backend: &B, id: &str) -> Result<(), ApiError> {
    ack(backend, ApiRequest::delete(format!("{ADMIN_USERS}/{id}"))).await
}

#[derive(Debug, Deserialize)]
struct ModeratorsResponse {
    #[serde(default)]
    moderators: Vec<Moderator>,
}

/// Privileged accounts from `GET /api/admin/moderators`.
///
/// # Errors
///
/// `Rejected` for non-admin sessions.
pub async fn moderators<B: Backend>(backend: &B) -> Result<Vec<Moderator>, ApiError> {
    let resp: ModeratorsResponse = decode(backend.send(ApiRequest::get(ADMIN_MODERATORS)).await?)?;
    Ok(resp.moderators)
}

/// Create a moderator or admin via `POST /api/admin/moderators`.
///
/// # Errors
///
/// `Rejected` with the server message (e.g. duplicate email).
pub async fn create_moderator<B: Backend>(backend: &B, account: &NewModerator) -> Result<(), ApiError> {
    let body = serde_json::to_value(account).map_err(|e| ApiError::Network(e.to_string()))?;
    ack(backend, ApiRequest::post_json(ADMIN_MODERATORS, body)).await
}
