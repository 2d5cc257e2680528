use super::*;

fn labels(plan: NavPlan) -> Vec<&'static str> {
    plan.links.iter().map(|l| l.label).collect()
}

#[test]
fn guest_sees_public_links_and_lands_on_login() {
    let plan = resolve_nav(false, None);
    assert_eq!(plan.home_path, LOGIN_PATH);
    assert_eq!(labels(plan), ["About", "Login", "Register"]);
}

#[test]
fn stale_role_is_ignored_when_signed_out() {
    assert_eq!(resolve_nav(false, Some(Role::Admin)), resolve_nav(false, None));
}

#[test]
fn citizen_lands_on_submit() {
    let plan = resolve_nav(true, Some(Role::User));
    assert_eq!(plan.home_path, SUBMIT_PATH);
    assert_eq!(labels(plan), ["Submit Complaint", "History", "Profile", "About"]);
}

#[test]
fn staff_land_on_admin_dashboard() {
    for role in [Role::Admin, Role::Moderator] {
        let plan = resolve_nav(true, Some(role));
        assert_eq!(plan.home_path, ADMIN_HOME_PATH);
        assert_eq!(labels(plan), ["Dashboard", "Complaints", "Users", "Profile", "About"]);
    }
}

#[test]
fn staff_never_see_submit_complaint() {
    for role in [Role::Admin, Role::Moderator] {
        let plan = resolve_nav(true, Some(role));
        assert!(!plan.contains(SUBMIT_PATH));
        assert!(plan.links.iter().all(|l| l.label != "Submit Complaint"));
    }
}

#[test]
fn profile_not_loaded_yet_counts_as_citizen() {
    assert_eq!(resolve_nav(true, None).home_path, SUBMIT_PATH);
}

#[test]
fn role_chip_only_for_staff() {
    assert_eq!(role_chip(Viewer::Admin), Some("Admin"));
    assert_eq!(role_chip(Viewer::Moderator), Some("Moderator"));
    assert_eq!(role_chip(Viewer::User), None);
    assert_eq!(role_chip(Viewer::Guest), None);
}

#[test]
fn upload_proof_href_encodes_id() {
    assert_eq!(upload_proof_href("65f0a1"), "/upload-proof?complaint=65f0a1");
    assert_eq!(upload_proof_href("a b"), "/upload-proof?complaint=a%20b");
}

#[test]
fn logout_leaves_public_pages_for_login() {
    for path in [ABOUT_PATH, RESET_PASSWORD_PATH, HISTORY_PATH, ADMIN_USERS_PATH] {
        assert_eq!(logout_redirect(path), Some(LOGIN_PATH), "{path}");
    }
    assert_eq!(logout_redirect(LOGIN_PATH), None);
}
