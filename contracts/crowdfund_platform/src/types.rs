//! # Types
//!
//! Shared data structures used across all modules of the crowdfunding
//! platform.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Fundraiser` is internally stored as two separate ledger entries:
//!
//! - [`FundraiserConfig`] — written once at creation; never mutated.
//! - [`FundraiserState`] — rewritten on every donation, admin review,
//!   upvote toggle, and withdrawal.
//!
//! Donations, comments, and the upvoter set live in their own per-campaign
//! ledger entries (see `storage`), so the state entry stays small even for
//! campaigns with thousands of donations. The public API exposes the
//! reconstructed [`Fundraiser`] snapshot for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`FundraiserStatus`] is deliberately *not* forward-only:
//!
//! ```text
//! Pending ◄──► Approved ◄──► Declined      (admin may flip freely)
//!                  │
//!                  ▼
//!              Finished                    (only via withdraw_funds)
//! ```
//!
//! `Finished` is terminal in practice, but the admin review calls stay
//! callable afterward and can move the status back out. That matches the
//! platform's review semantics and is pinned by tests.

use soroban_sdk::{contracttype, Address, String};

/// Standing of an identity in the user registry.
///
/// Unknown identities default to `Active`; only the administrator can move
/// an identity between `Active` and `Blocked`, and only a promotion of a
/// pending request grants `Benefactor`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserStatus {
    /// May create fundraisers, donate, comment, and upvote.
    Active,
    /// Donations are anonymized; commenting and campaign creation are refused.
    Blocked,
    /// Trusted identity whose fundraisers are auto-approved on creation.
    Benefactor,
}

/// Resolution state of a benefactor promotion request.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Declined,
}

/// A benefactor promotion request.
///
/// The pending queue holds only sender addresses; the request body lives in
/// the per-sender "latest request" slot and persists forever as a decision
/// record after the administrator resolves it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BenefactorRequest {
    pub sender: Address,
    /// Free-form motivation supplied by the requester.
    pub comment: String,
    /// Set by `decline_latest_request`; empty otherwise. Unlike the
    /// fundraiser decline path, no length bounds apply here.
    pub decline_reason: String,
    pub status: RequestStatus,
}

/// Lifecycle status of a fundraiser.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundraiserStatus {
    /// Awaiting admin review.
    Pending,
    /// Visible and endorsed; the initial status for benefactor campaigns.
    Approved,
    /// Rejected by the admin; `decline_reason` carries the why.
    Declined,
    /// Funds withdrawn by the beneficiary.
    Finished,
}

/// Immutable fundraiser configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundraiserConfig {
    pub id: u64,
    /// Address that may withdraw the raised funds.
    pub beneficiary: Address,
    /// Target amount in funding-token units. Zero is accepted and makes
    /// the campaign immediately withdrawable.
    pub goal: i128,
    /// Ledger timestamp after which donations and comments are refused.
    pub deadline: u64,
    /// Ledger timestamp of creation.
    pub created_at: u64,
    pub title: String,
    pub description: String,
    /// Off-chain metadata link (e.g. campaign page or image).
    pub uri: String,
}

/// Mutable fundraiser state, rewritten on every mutation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundraiserState {
    pub status: FundraiserStatus,
    /// Lifetime sum of all donation amounts. Never decreases.
    pub total_donations: i128,
    /// Portion of `total_donations` still held by the contract.
    /// Zeroed by a successful withdrawal.
    pub balance: i128,
    /// Set by `decline`; cleared by `approve`.
    pub decline_reason: String,
    pub upvote_count: u32,
}

/// Full snapshot of a fundraiser.
///
/// Used as the public API return type; reconstructed internally from the
/// split [`FundraiserConfig`] + [`FundraiserState`] storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fundraiser {
    pub id: u64,
    pub status: FundraiserStatus,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,
    pub created_at: u64,
    pub total_donations: i128,
    pub balance: i128,
    pub title: String,
    pub description: String,
    pub uri: String,
    pub decline_reason: String,
    pub upvote_count: u32,
}

impl Fundraiser {
    /// Reassemble the public snapshot from its two storage halves.
    pub fn from_parts(config: FundraiserConfig, state: FundraiserState) -> Self {
        Fundraiser {
            id: config.id,
            status: state.status,
            beneficiary: config.beneficiary,
            goal: config.goal,
            deadline: config.deadline,
            created_at: config.created_at,
            total_donations: state.total_donations,
            balance: state.balance,
            title: config.title,
            description: config.description,
            uri: config.uri,
            decline_reason: state.decline_reason,
            upvote_count: state.upvote_count,
        }
    }
}

/// A recorded donation.
///
/// `donor` is `None` when the donor was blocked at donation time: the value
/// still counts, but the identity and comment are scrubbed from the record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub donor: Option<Address>,
    pub amount: i128,
    pub comment: String,
}

/// A recorded comment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    pub author: Address,
    pub text: String,
}
