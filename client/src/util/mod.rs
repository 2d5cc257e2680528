//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (geolocation, file inputs) and
//! pure policy (route gating, navigation, validation) from page and component
//! code so the rules are testable without a DOM.

pub mod auth;
pub mod cancel;
pub mod files;
pub mod format;
pub mod geo;
pub mod nav;
pub mod validate;
