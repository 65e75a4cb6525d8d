//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type      | Description                         |
//! |-------------------|-----------|-------------------------------------|
//! | `Admin`           | `Address` | Administrator, set once by `init`   |
//! | `Token`           | `Address` | Funding-token (SAC) address         |
//! | `FundraiserCount` | `u64`     | Auto-increment fundraiser counter   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                     | Type                  | Description              |
//! |-------------------------|-----------------------|--------------------------|
//! | `UserStatus(addr)`      | `UserStatus`          | Registry status          |
//! | `LatestRequest(addr)`   | `BenefactorRequest`   | Latest request per user  |
//! | `RequestQueue`          | `Vec<Address>`        | Pending senders, append order |
//! | `FrConfig(id)`          | `FundraiserConfig`    | Immutable campaign data  |
//! | `FrState(id)`           | `FundraiserState`     | Mutable campaign state   |
//! | `Donations(id)`         | `Vec<Donation>`       | Append-only ledger       |
//! | `Comments(id)`          | `Vec<Comment>`        | Append-only ledger       |
//! | `Upvoters(id)`          | `Vec<Address>`        | Current upvoter set      |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! The donation/comment/upvoter collections are separate entries so the
//! hot `FrState` write on every donation stays a few dozen bytes.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::types::{
    BenefactorRequest, Comment, Donation, Fundraiser, FundraiserConfig, FundraiserState,
    UserStatus,
};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys live as long as the contract and are extended
/// together. Persistent-tier keys hold per-identity and per-campaign data
/// with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrator address (Instance).
    Admin,
    /// Funding-token address (Instance).
    Token,
    /// Global auto-increment counter for fundraiser IDs (Instance).
    FundraiserCount,
    /// Registry status per identity (Persistent).
    UserStatus(Address),
    /// Most recent benefactor request per identity (Persistent).
    LatestRequest(Address),
    /// Pending benefactor request senders in append order (Persistent).
    RequestQueue,
    /// Immutable fundraiser configuration keyed by ID (Persistent).
    FrConfig(u64),
    /// Mutable fundraiser state keyed by ID (Persistent).
    FrState(u64),
    /// Donation ledger keyed by fundraiser ID (Persistent).
    Donations(u64),
    /// Comment ledger keyed by fundraiser ID (Persistent).
    Comments(u64),
    /// Upvoter set keyed by fundraiser ID (Persistent).
    Upvoters(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Retrieve the administrator. Panics with `NotInitialized` before `init`
/// has run.
pub fn get_admin(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

/// Atomically reads, increments, and stores the fundraiser counter.
/// Returns the ID to use for the *current* fundraiser (pre-increment value).
pub fn get_and_increment_fundraiser_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::FundraiserCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::FundraiserCount, &(current + 1));
    current
}

pub fn fundraiser_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundraiserCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ----- user registry -----

/// Registry status for `user`, defaulting to `Active` for identities the
/// registry has never written.
pub fn user_status(env: &Env, user: &Address) -> UserStatus {
    let key = DataKey::UserStatus(user.clone());
    match env.storage().persistent().get(&key) {
        Some(status) => {
            bump_persistent(env, &key);
            status
        }
        None => UserStatus::Active,
    }
}

pub fn set_user_status(env: &Env, user: &Address, status: UserStatus) {
    let key = DataKey::UserStatus(user.clone());
    env.storage().persistent().set(&key, &status);
    bump_persistent(env, &key);
}

pub fn latest_request(env: &Env, user: &Address) -> Option<BenefactorRequest> {
    let key = DataKey::LatestRequest(user.clone());
    let request: Option<BenefactorRequest> = env.storage().persistent().get(&key);
    if request.is_some() {
        bump_persistent(env, &key);
    }
    request
}

pub fn set_latest_request(env: &Env, user: &Address, request: &BenefactorRequest) {
    let key = DataKey::LatestRequest(user.clone());
    env.storage().persistent().set(&key, request);
    bump_persistent(env, &key);
}

/// Pending request senders in append order; the tail is the next one the
/// administrator will resolve.
pub fn request_queue(env: &Env) -> Vec<Address> {
    let key = DataKey::RequestQueue;
    match env.storage().persistent().get(&key) {
        Some(queue) => {
            bump_persistent(env, &key);
            queue
        }
        None => Vec::new(env),
    }
}

pub fn set_request_queue(env: &Env, queue: &Vec<Address>) {
    let key = DataKey::RequestQueue;
    env.storage().persistent().set(&key, queue);
    bump_persistent(env, &key);
}

// ----- fundraisers -----

/// Save both the immutable config and initial mutable state for a new
/// fundraiser.
pub fn save_fundraiser(env: &Env, config: &FundraiserConfig, state: &FundraiserState) {
    let config_key = DataKey::FrConfig(config.id);
    let state_key = DataKey::FrState(config.id);
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load only the immutable fundraiser configuration.
pub fn load_config(env: &Env, id: u64) -> FundraiserConfig {
    let key = DataKey::FrConfig(id);
    let config: FundraiserConfig = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::FundraiserNotFound));
    bump_persistent(env, &key);
    config
}

/// Load only the mutable fundraiser state.
pub fn load_state(env: &Env, id: u64) -> FundraiserState {
    let key = DataKey::FrState(id);
    let state: FundraiserState = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::FundraiserNotFound));
    bump_persistent(env, &key);
    state
}

/// Save only the mutable fundraiser state (the hot path).
pub fn save_state(env: &Env, id: u64, state: &FundraiserState) {
    let key = DataKey::FrState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Load the full `Fundraiser` snapshot by combining config and state.
pub fn load_fundraiser(env: &Env, id: u64) -> Fundraiser {
    Fundraiser::from_parts(load_config(env, id), load_state(env, id))
}

// ----- per-campaign collections -----

pub fn donations(env: &Env, id: u64) -> Vec<Donation> {
    let key = DataKey::Donations(id);
    match env.storage().persistent().get(&key) {
        Some(list) => {
            bump_persistent(env, &key);
            list
        }
        None => Vec::new(env),
    }
}

pub fn push_donation(env: &Env, id: u64, donation: &Donation) {
    let key = DataKey::Donations(id);
    let mut list = donations(env, id);
    list.push_back(donation.clone());
    env.storage().persistent().set(&key, &list);
    bump_persistent(env, &key);
}

pub fn comments(env: &Env, id: u64) -> Vec<Comment> {
    let key = DataKey::Comments(id);
    match env.storage().persistent().get(&key) {
        Some(list) => {
            bump_persistent(env, &key);
            list
        }
        None => Vec::new(env),
    }
}

pub fn push_comment(env: &Env, id: u64, comment: &Comment) {
    let key = DataKey::Comments(id);
    let mut list = comments(env, id);
    list.push_back(comment.clone());
    env.storage().persistent().set(&key, &list);
    bump_persistent(env, &key);
}

pub fn upvoters(env: &Env, id: u64) -> Vec<Address> {
    let key = DataKey::Upvoters(id);
    match env.storage().persistent().get(&key) {
        Some(set) => {
            bump_persistent(env, &key);
            set
        }
        None => Vec::new(env),
    }
}

pub fn set_upvoters(env: &Env, id: u64, set: &Vec<Address>) {
    let key = DataKey::Upvoters(id);
    env.storage().persistent().set(&key, set);
    bump_persistent(env, &key);
}
