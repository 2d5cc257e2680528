use super::*;

#[test]
fn fresh_token_is_live() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
    assert_eq!(token.guard(7), Some(7));
}

#[test]
fn cancel_is_shared_between_clones() {
    let token = CancelToken::new();
    let in_flight = token.clone();
    token.cancel();
    assert!(in_flight.is_cancelled());
    assert_eq!(in_flight.guard("late response"), None);
}

#[test]
fn newer_request_cancels_older_one() {
    let slot = RequestSlot::new();
    let first = slot.next();
    let second = slot.next();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    slot.cancel();
    assert!(second.is_cancelled());
}
