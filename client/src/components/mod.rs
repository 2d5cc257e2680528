//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navbar, toasts, route gate) and the
//! building blocks of complaint and admin tables. They read session state
//! from Leptos context and never write it except through `SessionStore`.

pub mod auth_gate;
pub mod complaint_card;
pub mod navbar;
pub mod pagination;
pub mod status_chip;
pub mod toasts;
