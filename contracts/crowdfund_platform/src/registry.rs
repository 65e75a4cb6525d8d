//! # User registry
//!
//! Administrator guard, per-identity status map, and the benefactor
//! request stack. Everything authorization-shaped lives here so the entry
//! points in `lib.rs` stay thin.
//!
//! ## Request ordering
//!
//! The pending queue is processed from the tail: the administrator always
//! resolves the request appended most recently, which can starve earlier
//! requesters indefinitely. That ordering is part of the platform's
//! contract surface and must not be "fixed" into FIFO.
//!
//! ## Status machine
//!
//! ```text
//! Active ◄──► Blocked          (admin toggles, reversible)
//! Active / Blocked ──► Benefactor   (promotion of a pending request)
//! ```
//!
//! `block_user` writes `Blocked` unconditionally, so an admin block also
//! overwrites `Benefactor`; a later unblock restores `Active`.

use soroban_sdk::{panic_with_error, Address, Env, String};

use crate::storage;
use crate::types::{BenefactorRequest, RequestStatus, UserStatus};
use crate::Error;

/// Panic with `NotAdmin` unless `caller` is the stored administrator.
pub fn require_admin(env: &Env, caller: &Address) {
    if *caller != storage::get_admin(env) {
        panic_with_error!(env, Error::NotAdmin);
    }
}

/// Panic with `CallerBlocked` if the registry marks `caller` as blocked.
pub fn require_not_blocked(env: &Env, caller: &Address) {
    if is_blocked(env, caller) {
        panic_with_error!(env, Error::CallerBlocked);
    }
}

pub fn is_blocked(env: &Env, user: &Address) -> bool {
    storage::user_status(env, user) == UserStatus::Blocked
}

pub fn is_benefactor(env: &Env, user: &Address) -> bool {
    storage::user_status(env, user) == UserStatus::Benefactor
}

/// Append a new pending request for `sender`.
///
/// A sender whose latest request is still pending cannot open another;
/// after a resolution (either way) they may re-apply.
pub fn create_request(env: &Env, sender: &Address, comment: String) {
    if let Some(latest) = storage::latest_request(env, sender) {
        if latest.status == RequestStatus::Pending {
            panic_with_error!(env, Error::RequestAlreadyPending);
        }
    }

    let request = BenefactorRequest {
        sender: sender.clone(),
        comment,
        decline_reason: String::from_str(env, ""),
        status: RequestStatus::Pending,
    };
    storage::set_latest_request(env, sender, &request);

    let mut queue = storage::request_queue(env);
    queue.push_back(sender.clone());
    storage::set_request_queue(env, &queue);
}

/// Remove and return the tail of the pending queue.
///
/// Panics with `EmptyQueue` when nothing is pending.
fn pop_latest(env: &Env) -> Address {
    let mut queue = storage::request_queue(env);
    let sender = match queue.pop_back() {
        Some(sender) => sender,
        None => panic_with_error!(env, Error::EmptyQueue),
    };
    storage::set_request_queue(env, &queue);
    sender
}

/// Resolve the tail request as approved and grant `Benefactor`.
/// Returns the promoted sender.
pub fn promote_latest(env: &Env) -> Address {
    let sender = pop_latest(env);

    // The queue only ever holds senders with a recorded latest request.
    let mut request = storage::latest_request(env, &sender)
        .unwrap_or_else(|| panic_with_error!(env, Error::EmptyQueue));
    request.status = RequestStatus::Approved;
    storage::set_latest_request(env, &sender, &request);

    storage::set_user_status(env, &sender, UserStatus::Benefactor);
    sender
}

/// Resolve the tail request as declined, recording `reason` verbatim.
/// Returns the declined sender.
///
/// No length bounds on `reason` here; the fundraiser decline path is the
/// one that validates.
pub fn decline_latest(env: &Env, reason: String) -> Address {
    let sender = pop_latest(env);

    let mut request = storage::latest_request(env, &sender)
        .unwrap_or_else(|| panic_with_error!(env, Error::EmptyQueue));
    request.status = RequestStatus::Declined;
    request.decline_reason = reason;
    storage::set_latest_request(env, &sender, &request);
    sender
}

pub fn pending_count(env: &Env) -> u32 {
    storage::request_queue(env).len()
}
