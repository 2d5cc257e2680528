//! Cancellation tokens for page-scoped requests.
//!
//! A page creates one token, cancels it from `on_cleanup`, and checks it
//! before applying any response. Requests still run to completion; only
//! their results are dropped once the page is gone.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// `Some(value)` while the token is live, `None` once cancelled.
    pub fn guard<T>(&self, value: T) -> Option<T> {
        (!self.is_cancelled()).then_some(value)
    }
}

/// Token cancelled automatically when the current reactive owner is dropped.
pub fn scoped_token() -> CancelToken {
    let token = CancelToken::new();
    let on_drop = token.clone();
    leptos::prelude::on_cleanup(move || on_drop.cancel());
    token
}

/// Latest-request-wins slot: issuing a token cancels the previous one.
///
/// Used by listings whose filters can change while a fetch is in flight.
#[derive(Clone, Debug, Default)]
pub struct RequestSlot {
    current: Arc<Mutex<CancelToken>>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> CancelToken {
        let fresh = CancelToken::new();
        if let Ok(mut current) = self.current.lock() {
            current.cancel();
            *current = fresh.clone();
        }
        fresh
    }

    pub fn cancel(&self) {
        if let Ok(current) = self.current.lock() {
            current.cancel();
        }
    }
}

/// Slot whose live token is cancelled when the current reactive owner drops.
pub fn scoped_slot() -> RequestSlot {
    let slot = RequestSlot::new();
    let on_drop = slot.clone();
    leptos::prelude::on_cleanup(move || on_drop.cancel());
    slot
}
