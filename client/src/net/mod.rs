//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` is the transport seam, `api` the typed endpoint helpers and
//! envelope decoding, and `types` the shared wire schema.

pub mod api;
pub mod backend;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
