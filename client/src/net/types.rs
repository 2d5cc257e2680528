//! Wire DTOs for the Clean India backend REST API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and keys documents by `_id`. These types
//! accept both spellings of the identifier and tolerate missing optional
//! fields so older backend builds still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Moderator,
    Admin,
    /// Citizen account. Unknown role strings also land here.
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

/// Who is looking at the UI: a guest or a signed-in role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Viewer {
    Guest,
    User,
    Moderator,
    Admin,
}

impl Viewer {
    /// Derive the viewer from session truth.
    ///
    /// An authenticated session whose profile has not loaded yet counts as a
    /// citizen, never as staff.
    pub fn from_session(is_authenticated: bool, role: Option<Role>) -> Self {
        if !is_authenticated {
            return Self::Guest;
        }
        match role.unwrap_or_default() {
            Role::User => Self::User,
            Role::Moderator => Self::Moderator,
            Role::Admin => Self::Admin,
        }
    }

    /// The single role policy: staff may open admin-only views.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }
}

/// The signed-in user as returned by `/api/user/data` and `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_account_verified: bool,
}

impl User {
    /// Up to two upper-case initials for the avatar badge.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "?".to_owned() } else { initials }
    }
}

/// WGS84 coordinates captured from the browser.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Four-decimal `lat, lng` label used when no address was given.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Complaint lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ComplaintStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Resolved, Self::Rejected];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Resolved and rejected complaints never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

/// Triage priority assigned by staff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Reporter account attached to a complaint in admin listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporter {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A citizen garbage report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub address: Option<String>,
    /// Image URL served by the backend's file storage.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub proof_video: Option<String>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// RFC 3339 submission timestamp.
    #[serde(default)]
    pub submitted_at: String,
    /// Populated reporter in admin listings; a bare id elsewhere.
    #[serde(default, deserialize_with = "lenient_reporter")]
    pub user: Option<Reporter>,
}

fn lenient_reporter<'de, D>(deserializer: D) -> Result<Option<Reporter>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl Complaint {
    /// Address if the citizen gave one, otherwise the coordinates.
    pub fn place(&self) -> String {
        match self.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => address.to_owned(),
            _ => self.location.label(),
        }
    }

    pub fn reporter_email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }

    /// Proof video is only collected once the cleanup is confirmed.
    pub fn awaits_proof(&self) -> bool {
        self.status == ComplaintStatus::Resolved && self.proof_video.as_deref().is_none_or(str::is_empty)
    }
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_complaints: u64,
    #[serde(default)]
    pub pending_complaints: u64,
    #[serde(default)]
    pub resolved_complaints: u64,
    /// Complaints submitted during the last seven days.
    #[serde(default)]
    pub recent_complaints: u64,
}

/// A user row in the admin users table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_account_verified: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

fn default_active() -> bool {
    true
}

/// A privileged account in the moderators listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moderator {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
}

/// One page of the admin complaint listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplaintPage {
    pub complaints: Vec<Complaint>,
    pub total: u64,
}

/// One page of the admin user listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<ManagedUser>,
    pub total: u64,
}

/// Staff edit of a complaint's triage fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub status: ComplaintStatus,
    pub priority: Priority,
    pub admin_notes: Option<String>,
}

impl From<&Complaint> for ComplaintUpdate {
    fn from(c: &Complaint) -> Self {
        Self { status: c.status, priority: c.priority, admin_notes: c.admin_notes.clone() }
    }
}

/// Request body for creating a moderator or admin account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewModerator {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for NewModerator {
    fn default() -> Self {
        Self { name: String::new(), email: String::new(), password: String::new(), role: Role::Moderator }
    }
}
