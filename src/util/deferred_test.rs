use std::cell::Cell;

use super::*;

#[test]
fn new_guard_is_alive() {
    assert!(LifetimeGuard::new().is_alive());
}

#[test]
fn cancel_is_visible_through_clones() {
    let guard = LifetimeGuard::new();
    let task_copy = guard.clone();
    guard.cancel();
    assert!(!task_copy.is_alive());
}

#[test]
fn run_if_alive_runs_before_cancel_only() {
    let guard = LifetimeGuard::new();
    let calls = Cell::new(0);

    assert!(guard.run_if_alive(|| calls.set(calls.get() + 1)));
    guard.cancel();
    assert!(!guard.run_if_alive(|| calls.set(calls.get() + 1)));

    assert_eq!(calls.get(), 1);
}
