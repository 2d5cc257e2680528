//! Role-based navigation: which links a viewer sees and where "home" is.
//!
//! DESIGN
//! ======
//! `resolve_nav` is a pure function of session truth and is recomputed on
//! every render that reads the session. It shares `Viewer::is_staff` with the
//! route gate so the two can never disagree about who counts as staff.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::{Role, Viewer};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ABOUT_PATH: &str = "/about";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const SUBMIT_PATH: &str = "/submit";
pub const HISTORY_PATH: &str = "/history";
pub const UPLOAD_PROOF_PATH: &str = "/upload-proof";
pub const PROFILE_PATH: &str = "/profile";
pub const PAST_HISTORY_PATH: &str = "/pasthistory";
pub const VERIFICATION_PATH: &str = "/verification";
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";
pub const ADMIN_COMPLAINTS_PATH: &str = "/admin/complaints";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_MODERATORS_PATH: &str = "/admin/moderators";

/// Query parameter carrying the complaint id into the proof upload page.
pub const COMPLAINT_QUERY_KEY: &str = "complaint";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink { label, path }
}

const GUEST_LINKS: &[NavLink] = &[link("About", ABOUT_PATH), link("Login", LOGIN_PATH), link("Register", REGISTER_PATH)];

const STAFF_LINKS: &[NavLink] = &[
    link("Dashboard", ADMIN_HOME_PATH),
    link("Complaints", ADMIN_COMPLAINTS_PATH),
    link("Users", ADMIN_USERS_PATH),
    link("Profile", PROFILE_PATH),
    link("About", ABOUT_PATH),
];

const CITIZEN_LINKS: &[NavLink] = &[
    link("Submit Complaint", SUBMIT_PATH),
    link("History", HISTORY_PATH),
    link("Profile", PROFILE_PATH),
    link("About", ABOUT_PATH),
];

/// Home destination plus the ordered link set for one viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPlan {
    pub home_path: &'static str,
    pub links: &'static [NavLink],
}

impl NavPlan {
    pub fn contains(&self, path: &str) -> bool {
        self.links.iter().any(|l| l.path == path)
    }
}

pub fn plan_for(viewer: Viewer) -> NavPlan {
    match viewer {
        Viewer::Guest => NavPlan { home_path: LOGIN_PATH, links: GUEST_LINKS },
        v if v.is_staff() => NavPlan { home_path: ADMIN_HOME_PATH, links: STAFF_LINKS },
        _ => NavPlan { home_path: SUBMIT_PATH, links: CITIZEN_LINKS },
    }
}

pub fn resolve_nav(is_authenticated: bool, role: Option<Role>) -> NavPlan {
    plan_for(Viewer::from_session(is_authenticated, role))
}

/// Badge text shown next to staff names in the navbar.
pub fn role_chip(viewer: Viewer) -> Option<&'static str> {
    match viewer {
        Viewer::Admin => Some("Admin"),
        Viewer::Moderator => Some("Moderator"),
        Viewer::User | Viewer::Guest => None,
    }
}

/// Where logout sends the viewer; `None` when already on the login screen.
pub fn logout_redirect(current_path: &str) -> Option<&'static str> {
    (current_path != LOGIN_PATH).then_some(LOGIN_PATH)
}

/// Proof upload link for one complaint.
pub fn upload_proof_href(complaint_id: &str) -> String {
    let id = crate::net::api::query_string(&[(COMPLAINT_QUERY_KEY, complaint_id.to_owned())]);
    format!("{UPLOAD_PROOF_PATH}?{id}")
}
