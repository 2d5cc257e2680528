//! Staff-only pages. Every route here is wrapped in an admin-only `AuthGate`.

pub mod complaints;
pub mod dashboard;
pub mod moderators;
pub mod users;
