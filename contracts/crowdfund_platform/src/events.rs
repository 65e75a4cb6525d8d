//! # Events
//!
//! Payload structs and publish helpers for every event the platform emits.
//!
//! Fundraiser-scoped events are published under
//! `(symbol, fundraiser_id)` topics so indexers can filter per campaign;
//! registry events carry a single symbol topic and identify the affected
//! user in the payload.
//!
//! | Topic       | Payload                     |
//! |-------------|-----------------------------|
//! | `created`   | [`FundraiserCreated`]       |
//! | `donated`   | [`DonationReceived`]        |
//! | `commented` | [`CommentCreated`]          |
//! | `withdrawn` | [`FundsWithdrawn`]          |
//! | `upvoted`   | [`UpvoteToggled`]           |
//! | `blocked`   | [`Block`]                   |
//! | `unblocked` | [`Unblock`]                 |
//! | `promoted`  | [`GiveBenefactor`]          |
//! | `declined`  | [`DeclineBenefactor`]       |
//! | `requested` | [`CreateBenefactorRequest`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// A new fundraiser was created by the factory.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundraiserCreated {
    pub fundraiser_id: u64,
    pub beneficiary: Address,
    pub goal: i128,
    pub deadline: u64,
}

/// A donation was recorded. `donor` is `None` and `comment` empty when the
/// donor was blocked at donation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub donor: Option<Address>,
    pub amount: i128,
    pub comment: String,
}

/// A comment was appended to a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentCreated {
    pub creator: Address,
    pub comment: String,
}

/// The beneficiary withdrew the held balance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub amount: i128,
    pub time: u64,
}

/// A caller flipped their upvote; `value` is the new membership.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpvoteToggled {
    pub user: Address,
    pub value: bool,
}

/// The administrator blocked a user.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub user: Address,
    pub time: u64,
}

/// The administrator unblocked a user.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unblock {
    pub user: Address,
    pub time: u64,
}

/// The administrator promoted a pending request to benefactor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GiveBenefactor {
    pub user: Address,
    pub time: u64,
}

/// The administrator declined a pending benefactor request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclineBenefactor {
    pub user: Address,
    pub time: u64,
}

/// A user opened a benefactor promotion request.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateBenefactorRequest {
    pub user: Address,
    pub comment: String,
}

// ── Publish helpers ──────────────────────────────────────────────────

pub fn fundraiser_created(env: &Env, event: FundraiserCreated) {
    env.events()
        .publish((symbol_short!("created"), event.fundraiser_id), event);
}

pub fn donation_received(env: &Env, fundraiser_id: u64, event: DonationReceived) {
    env.events()
        .publish((symbol_short!("donated"), fundraiser_id), event);
}

pub fn comment_created(env: &Env, fundraiser_id: u64, event: CommentCreated) {
    env.events()
        .publish((symbol_short!("commented"), fundraiser_id), event);
}

pub fn funds_withdrawn(env: &Env, fundraiser_id: u64, event: FundsWithdrawn) {
    env.events()
        .publish((symbol_short!("withdrawn"), fundraiser_id), event);
}

pub fn upvote_toggled(env: &Env, fundraiser_id: u64, event: UpvoteToggled) {
    env.events()
        .publish((symbol_short!("upvoted"), fundraiser_id), event);
}

pub fn block(env: &Env, event: Block) {
    env.events().publish((symbol_short!("blocked"),), event);
}

pub fn unblock(env: &Env, event: Unblock) {
    env.events().publish((symbol_short!("unblocked"),), event);
}

pub fn give_benefactor(env: &Env, event: GiveBenefactor) {
    env.events().publish((symbol_short!("promoted"),), event);
}

pub fn decline_benefactor(env: &Env, event: DeclineBenefactor) {
    env.events().publish((symbol_short!("declined"),), event);
}

pub fn create_benefactor_request(env: &Env, event: CreateBenefactorRequest) {
    env.events().publish((symbol_short!("requested"),), event);
}
