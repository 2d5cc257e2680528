use futures::executor::block_on;
use leptos::prelude::*;
use serde_json::json;

use super::*;
use crate::net::api::{IS_AUTH, LOGIN, LOGOUT, USER_DATA};
use crate::net::testing::ScriptedBackend;
use crate::net::types::{Role, User};
use crate::state::session::SessionStore;

fn session(role: Option<Role>) -> AuthState {
    AuthState {
        is_authenticated: true,
        user: role.map(|role| User {
            id: "u1".to_owned(),
            name: "Rohit".to_owned(),
            email: "rohit@example.in".to_owned(),
            role,
            is_account_verified: true,
        }),
        loading: false,
    }
}

#[test]
fn loading_defers_any_decision() {
    let state = AuthState::default();
    assert_eq!(gate_decision(&state, false), GateDecision::Loading);
    assert_eq!(gate_decision(&state, true), GateDecision::Loading);
}

#[test]
fn unauthenticated_goes_to_login() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert_eq!(gate_decision(&state, false), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(gate_decision(&state, true), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn citizen_is_bounced_from_admin_views() {
    let state = session(Some(Role::User));
    assert_eq!(gate_decision(&state, true), GateDecision::Redirect(ADMIN_HOME_PATH));
    assert_eq!(gate_decision(&state, false), GateDecision::Render);
}

#[test]
fn missing_profile_never_unlocks_admin_views() {
    let state = session(None);
    assert_ne!(gate_decision(&state, true), GateDecision::Render);
}

#[test]
fn staff_render_admin_views() {
    for role in [Role::Admin, Role::Moderator] {
        assert_eq!(gate_decision(&session(Some(role)), true), GateDecision::Render);
    }
}

#[test]
fn redirect_target_skips_current_path() {
    let bounce = GateDecision::Redirect(ADMIN_HOME_PATH);
    assert_eq!(redirect_target(bounce, "/admin/users"), Some(ADMIN_HOME_PATH));
    assert_eq!(redirect_target(bounce, ADMIN_HOME_PATH), None);
    assert_eq!(redirect_target(GateDecision::Render, "/history"), None);
    assert_eq!(redirect_target(GateDecision::Loading, "/history"), None);
}

fn profile(role: &str) -> serde_json::Value {
    json!({
        "success": true,
        "userData": { "_id": "u1", "name": "Raj", "email": "raj@example.in", "role": role, "isAccountVerified": true }
    })
}

#[test]
fn gate_follows_live_session_transitions() {
    let owner = Owner::new();
    owner.set();

    let backend = ScriptedBackend::new();
    let store = SessionStore::new(backend.clone());
    let auth = store.auth();
    let admin_gate = Memo::new(move |_| gate_decision(&auth.get(), true));
    let citizen_gate = Memo::new(move |_| gate_decision(&auth.get(), false));

    assert_eq!(admin_gate.get_untracked(), GateDecision::Loading);

    backend.reply(IS_AUTH, json!({ "success": false, "message": "Not Authorized" }));
    block_on(store.check_session());
    assert_eq!(admin_gate.get_untracked(), GateDecision::Redirect(LOGIN_PATH));

    backend.reply(LOGIN, json!({ "success": true }));
    backend.reply(USER_DATA, profile("admin"));
    block_on(store.login("raj@example.in", "secret"));
    assert_eq!(admin_gate.get_untracked(), GateDecision::Render);

    backend.reply(USER_DATA, profile("user"));
    block_on(store.fetch_user_data());
    assert_eq!(admin_gate.get_untracked(), GateDecision::Redirect(ADMIN_HOME_PATH));
    assert_eq!(citizen_gate.get_untracked(), GateDecision::Render);

    backend.reply(LOGOUT, json!({ "success": true }));
    block_on(store.logout());
    assert_eq!(admin_gate.get_untracked(), GateDecision::Redirect(LOGIN_PATH));
    assert_eq!(citizen_gate.get_untracked(), GateDecision::Redirect(LOGIN_PATH));
}
