//! Shared reactive state and the services that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the session record, `session` the only code allowed to write
//! it, `notify` the toast surface, and `admin` the list/filter bookkeeping for
//! staff tables. `complaint` holds the citizen form flows.

pub mod admin;
pub mod auth;
pub mod complaint;
pub mod notify;
pub mod session;
