//! # Crowdfunding Platform Contract
//!
//! Single Soroban contract covering the whole platform:
//!
//! | Area           | Entry Point(s)                                        |
//! |----------------|-------------------------------------------------------|
//! | Bootstrap      | [`CrowdfundPlatform::init`]                           |
//! | User registry  | `request_benefactor_status`, `block_user`, `unblock_user`, `promote_latest_request`, `decline_latest_request` |
//! | Factory        | [`CrowdfundPlatform::create_fundraiser`]              |
//! | Campaigns      | `donate`, `comment`, `approve`, `decline`, `withdraw_funds`, `toggle_upvote` |
//! | Queries        | `status_of`, `latest_request_of`, `pending_request_count`, `list_fundraisers`, `fundraiser_count`, `details`, `all_donations`, `all_comments`, `can_withdraw` |
//!
//! ## Architecture
//!
//! Authorization and the benefactor request stack are fully delegated to
//! [`registry`]. Storage access is fully delegated to [`storage`]. Event
//! payloads and topics live in [`events`]. This file contains only the
//! public entry points and their precondition checks.
//!
//! Every entry point is atomic: a `panic_with_error!` aborts the host
//! invocation and rolls back every storage write and token movement, so
//! the named errors below are the complete failure surface.
//!
//! On withdrawal the outbound token transfer is the final effect, after
//! status and balance are committed; a reentrant call would observe
//! `Finished` with a zero balance and at worst repeat a zero-value
//! transfer.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_registry;

pub use events::{
    Block, CommentCreated, CreateBenefactorRequest, DeclineBenefactor, DonationReceived,
    FundraiserCreated, FundsWithdrawn, GiveBenefactor, Unblock, UpvoteToggled,
};
pub use types::{
    BenefactorRequest, Comment, Donation, Fundraiser, FundraiserStatus, RequestStatus, UserStatus,
};

const SECONDS_PER_DAY: u64 = 86_400;

/// Decline reasons on the fundraiser path must be 1..=200 bytes.
/// The benefactor-request decline path carries no such bound.
const MAX_DECLINE_REASON_LEN: u32 = 200;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    // Authorization
    NotAdmin = 3,
    NotBeneficiary = 4,
    CallerBlocked = 5,
    // Validation
    DonationTooLow = 6,
    ReasonTooShort = 7,
    ReasonTooLong = 8,
    // State
    RequestAlreadyPending = 9,
    EmptyQueue = 10,
    CampaignExpired = 11,
    GoalNotMet = 12,
    DeadlineNotPassed = 13,
    FundraiserNotFound = 14,
}

#[contract]
pub struct CrowdfundPlatform;

#[contractimpl]
impl CrowdfundPlatform {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the platform: fix the administrator and the funding
    /// token.
    ///
    /// Must be called exactly once after deployment; subsequent calls
    /// panic with `Error::AlreadyInitialized`. The administrator is
    /// immutable for the life of the contract.
    pub fn init(env: Env, admin: Address, token: Address) {
        admin.require_auth();
        if storage::has_admin(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);
    }

    // ─────────────────────────────────────────────────────────
    // User registry — self-service
    // ─────────────────────────────────────────────────────────

    /// Open a benefactor promotion request.
    ///
    /// Fails with `RequestAlreadyPending` while the caller's previous
    /// request is unresolved.
    pub fn request_benefactor_status(env: Env, caller: Address, comment: String) {
        caller.require_auth();
        registry::create_request(&env, &caller, comment.clone());
        events::create_benefactor_request(
            &env,
            CreateBenefactorRequest {
                user: caller,
                comment,
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // User registry — administrator
    // ─────────────────────────────────────────────────────────

    /// Block `target`. Idempotent; blocking an already-blocked user
    /// succeeds.
    pub fn block_user(env: Env, caller: Address, target: Address) {
        caller.require_auth();
        registry::require_admin(&env, &caller);
        storage::set_user_status(&env, &target, UserStatus::Blocked);
        events::block(
            &env,
            Block {
                user: target,
                time: env.ledger().timestamp(),
            },
        );
    }

    /// Unblock `target`, restoring `Active`. Idempotent.
    pub fn unblock_user(env: Env, caller: Address, target: Address) {
        caller.require_auth();
        registry::require_admin(&env, &caller);
        storage::set_user_status(&env, &target, UserStatus::Active);
        events::unblock(
            &env,
            Unblock {
                user: target,
                time: env.ledger().timestamp(),
            },
        );
    }

    /// Approve the most recently appended pending request: the sender
    /// becomes a benefactor and their latest-request record flips to
    /// `Approved`.
    ///
    /// Fails with `EmptyQueue` when nothing is pending. The queue is a
    /// stack; earlier requests wait until everything above them is
    /// resolved.
    pub fn promote_latest_request(env: Env, caller: Address) {
        caller.require_auth();
        registry::require_admin(&env, &caller);
        let sender = registry::promote_latest(&env);
        events::give_benefactor(
            &env,
            GiveBenefactor {
                user: sender,
                time: env.ledger().timestamp(),
            },
        );
    }

    /// Decline the most recently appended pending request, recording
    /// `reason` on the sender's latest-request record.
    ///
    /// Same stack semantics as [`Self::promote_latest_request`]; `reason`
    /// is stored verbatim with no length bounds.
    pub fn decline_latest_request(env: Env, caller: Address, reason: String) {
        caller.require_auth();
        registry::require_admin(&env, &caller);
        let sender = registry::decline_latest(&env, reason);
        events::decline_benefactor(
            &env,
            DeclineBenefactor {
                user: sender,
                time: env.ledger().timestamp(),
            },
        );
    }

    // ─────────────────────────────────────────────────────────
    // User registry — queries
    // ─────────────────────────────────────────────────────────

    /// Registry status of `user`; `Active` for identities never written.
    pub fn status_of(env: Env, user: Address) -> UserStatus {
        storage::user_status(&env, &user)
    }

    /// The most recent benefactor request of `user`, resolved or not.
    pub fn latest_request_of(env: Env, user: Address) -> Option<BenefactorRequest> {
        storage::latest_request(&env, &user)
    }

    /// Number of unresolved benefactor requests.
    pub fn pending_request_count(env: Env) -> u32 {
        registry::pending_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Factory
    // ─────────────────────────────────────────────────────────

    /// Create a new fundraiser and return its id.
    ///
    /// Blocked callers are refused. The campaign starts `Approved` when
    /// `beneficiary` currently holds benefactor status, `Pending`
    /// otherwise. `goal` and `duration_days` are accepted unvalidated: a
    /// zero goal is immediately withdrawable and a zero duration makes
    /// `deadline == created_at`.
    pub fn create_fundraiser(
        env: Env,
        caller: Address,
        beneficiary: Address,
        goal: i128,
        duration_days: u64,
        title: String,
        description: String,
        uri: String,
    ) -> u64 {
        caller.require_auth();
        registry::require_not_blocked(&env, &caller);

        let now = env.ledger().timestamp();
        let deadline = now + duration_days * SECONDS_PER_DAY;
        let status = if registry::is_benefactor(&env, &beneficiary) {
            FundraiserStatus::Approved
        } else {
            FundraiserStatus::Pending
        };

        let id = storage::get_and_increment_fundraiser_id(&env);
        let config = types::FundraiserConfig {
            id,
            beneficiary: beneficiary.clone(),
            goal,
            deadline,
            created_at: now,
            title,
            description,
            uri,
        };
        let state = types::FundraiserState {
            status,
            total_donations: 0,
            balance: 0,
            decline_reason: String::from_str(&env, ""),
            upvote_count: 0,
        };
        storage::save_fundraiser(&env, &config, &state);

        events::fundraiser_created(
            &env,
            FundraiserCreated {
                fundraiser_id: id,
                beneficiary,
                goal,
                deadline,
            },
        );
        id
    }

    /// Number of fundraisers ever created.
    pub fn fundraiser_count(env: Env) -> u64 {
        storage::fundraiser_count(&env)
    }

    /// All fundraisers in creation order. Never reordered, never removed.
    pub fn list_fundraisers(env: Env) -> Vec<Fundraiser> {
        let mut list = Vec::new(&env);
        for id in 0..storage::fundraiser_count(&env) {
            list.push_back(storage::load_fundraiser(&env, id));
        }
        list
    }

    /// Full snapshot of one fundraiser.
    pub fn details(env: Env, fundraiser_id: u64) -> Fundraiser {
        storage::load_fundraiser(&env, fundraiser_id)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign operations
    // ─────────────────────────────────────────────────────────

    /// Donate `amount` of the funding token to a campaign.
    ///
    /// The amount must be positive and the campaign unexpired; both checks
    /// apply to blocked callers too. A blocked caller's donation is
    /// recorded and emitted with the donor scrubbed to `None` and the
    /// comment cleared, but the value still counts toward the total and
    /// the held balance.
    pub fn donate(env: Env, fundraiser_id: u64, caller: Address, amount: i128, comment: String) {
        caller.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::DonationTooLow);
        }

        let config = storage::load_config(&env, fundraiser_id);
        let mut state = storage::load_state(&env, fundraiser_id);

        if env.ledger().timestamp() > config.deadline {
            panic_with_error!(&env, Error::CampaignExpired);
        }

        let token_client = token::Client::new(&env, &storage::get_token(&env));
        token_client.transfer(&caller, &env.current_contract_address(), &amount);

        let donation = if registry::is_blocked(&env, &caller) {
            Donation {
                donor: None,
                amount,
                comment: String::from_str(&env, ""),
            }
        } else {
            Donation {
                donor: Some(caller),
                amount,
                comment,
            }
        };
        storage::push_donation(&env, fundraiser_id, &donation);

        state.total_donations += amount;
        state.balance += amount;
        storage::save_state(&env, fundraiser_id, &state);

        events::donation_received(
            &env,
            fundraiser_id,
            DonationReceived {
                donor: donation.donor,
                amount,
                comment: donation.comment,
            },
        );
    }

    /// Append a comment to a campaign.
    ///
    /// Refused after the deadline and for blocked callers, in that order.
    pub fn comment(env: Env, fundraiser_id: u64, caller: Address, text: String) {
        caller.require_auth();

        let config = storage::load_config(&env, fundraiser_id);
        if env.ledger().timestamp() > config.deadline {
            panic_with_error!(&env, Error::CampaignExpired);
        }
        registry::require_not_blocked(&env, &caller);

        storage::push_comment(
            &env,
            fundraiser_id,
            &Comment {
                author: caller.clone(),
                text: text.clone(),
            },
        );
        events::comment_created(
            &env,
            fundraiser_id,
            CommentCreated {
                creator: caller,
                comment: text,
            },
        );
    }

    /// Approve a campaign, clearing any prior decline reason.
    ///
    /// Allowed regardless of current status or deadline; re-approving a
    /// `Finished` campaign is a documented quirk, not an error.
    pub fn approve(env: Env, fundraiser_id: u64, caller: Address) {
        caller.require_auth();
        registry::require_admin(&env, &caller);

        let mut state = storage::load_state(&env, fundraiser_id);
        state.status = FundraiserStatus::Approved;
        state.decline_reason = String::from_str(&env, "");
        storage::save_state(&env, fundraiser_id, &state);
    }

    /// Decline a campaign with a reason of 1..=200 bytes.
    ///
    /// Allowed regardless of current status or deadline.
    pub fn decline(env: Env, fundraiser_id: u64, caller: Address, reason: String) {
        caller.require_auth();
        registry::require_admin(&env, &caller);

        let mut state = storage::load_state(&env, fundraiser_id);
        if reason.len() == 0 {
            panic_with_error!(&env, Error::ReasonTooShort);
        }
        if reason.len() > MAX_DECLINE_REASON_LEN {
            panic_with_error!(&env, Error::ReasonTooLong);
        }
        state.status = FundraiserStatus::Declined;
        state.decline_reason = reason;
        storage::save_state(&env, fundraiser_id, &state);
    }

    /// Withdraw the held balance to the beneficiary.
    ///
    /// Requires `total_donations >= goal`; when the goal is unmet the
    /// error names what is still open: `DeadlineNotPassed` while the
    /// campaign runs, `GoalNotMet` after the deadline. On success the
    /// status becomes `Finished`, the balance is zeroed and emitted, and
    /// the token transfer happens last. A repeat call after success still
    /// passes the goal check and transfers zero.
    pub fn withdraw_funds(env: Env, fundraiser_id: u64, caller: Address) {
        caller.require_auth();

        let config = storage::load_config(&env, fundraiser_id);
        if caller != config.beneficiary {
            panic_with_error!(&env, Error::NotBeneficiary);
        }

        let mut state = storage::load_state(&env, fundraiser_id);
        let now = env.ledger().timestamp();
        if state.total_donations < config.goal {
            if now <= config.deadline {
                panic_with_error!(&env, Error::DeadlineNotPassed);
            }
            panic_with_error!(&env, Error::GoalNotMet);
        }

        let amount = state.balance;
        state.status = FundraiserStatus::Finished;
        state.balance = 0;
        storage::save_state(&env, fundraiser_id, &state);

        events::funds_withdrawn(&env, fundraiser_id, FundsWithdrawn { amount, time: now });

        // State is committed and the event emitted; the outbound transfer
        // stays the final effect of the operation.
        let token_client = token::Client::new(&env, &storage::get_token(&env));
        token_client.transfer(&env.current_contract_address(), &config.beneficiary, &amount);
    }

    /// Flip the caller's upvote and return the new membership value.
    pub fn toggle_upvote(env: Env, fundraiser_id: u64, caller: Address) -> bool {
        caller.require_auth();

        let mut state = storage::load_state(&env, fundraiser_id);
        let mut upvoters = storage::upvoters(&env, fundraiser_id);

        let value = match upvoters.first_index_of(caller.clone()) {
            Some(index) => {
                upvoters.remove(index);
                false
            }
            None => {
                upvoters.push_back(caller.clone());
                true
            }
        };
        state.upvote_count = upvoters.len();
        storage::set_upvoters(&env, fundraiser_id, &upvoters);
        storage::save_state(&env, fundraiser_id, &state);

        events::upvote_toggled(&env, fundraiser_id, UpvoteToggled { user: caller, value });
        value
    }

    // ─────────────────────────────────────────────────────────
    // Campaign queries
    // ─────────────────────────────────────────────────────────

    /// Donation ledger in append order.
    pub fn all_donations(env: Env, fundraiser_id: u64) -> Vec<Donation> {
        // Existence check; unknown ids must not read as empty campaigns.
        let _ = storage::load_config(&env, fundraiser_id);
        storage::donations(&env, fundraiser_id)
    }

    /// Comment ledger in append order.
    pub fn all_comments(env: Env, fundraiser_id: u64) -> Vec<Comment> {
        let _ = storage::load_config(&env, fundraiser_id);
        storage::comments(&env, fundraiser_id)
    }

    /// Whether `caller` could withdraw right now.
    ///
    /// Mirrors the goal-OR-deadline check only: this reports `true` for
    /// the beneficiary once the deadline has passed even when the goal is
    /// unmet, a case in which [`Self::withdraw_funds`] fails with
    /// `GoalNotMet`. The asymmetry is intentional and pinned by tests.
    pub fn can_withdraw(env: Env, fundraiser_id: u64, caller: Address) -> bool {
        let config = storage::load_config(&env, fundraiser_id);
        let state = storage::load_state(&env, fundraiser_id);
        let now = env.ledger().timestamp();
        (state.total_donations >= config.goal || now >= config.deadline)
            && caller == config.beneficiary
    }
}
