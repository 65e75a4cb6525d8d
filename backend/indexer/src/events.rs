//! Canonical event types emitted by the crowdfunding platform contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/crowdfund_platform/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the platform contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new fundraiser was created (`created` topic).
    FundraiserCreated,
    /// A donation was recorded (`donated` topic).
    DonationReceived,
    /// A comment was appended to a campaign (`commented` topic).
    CommentCreated,
    /// The beneficiary withdrew the held balance (`withdrawn` topic).
    FundsWithdrawn,
    /// A user flipped their upvote (`upvoted` topic).
    UpvoteToggled,
    /// The admin blocked a user (`blocked` topic).
    UserBlocked,
    /// The admin unblocked a user (`unblocked` topic).
    UserUnblocked,
    /// A benefactor request was approved (`promoted` topic).
    BenefactorGranted,
    /// A benefactor request was declined (`declined` topic).
    BenefactorDeclined,
    /// A benefactor request was opened (`requested` topic).
    BenefactorRequested,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an
    /// [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::FundraiserCreated,
            "donated" => Self::DonationReceived,
            "commented" => Self::CommentCreated,
            "withdrawn" => Self::FundsWithdrawn,
            "upvoted" => Self::UpvoteToggled,
            "blocked" => Self::UserBlocked,
            "unblocked" => Self::UserUnblocked,
            "promoted" => Self::BenefactorGranted,
            "declined" => Self::BenefactorDeclined,
            "requested" => Self::BenefactorRequested,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FundraiserCreated => "fundraiser_created",
            Self::DonationReceived => "donation_received",
            Self::CommentCreated => "comment_created",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::UpvoteToggled => "upvote_toggled",
            Self::UserBlocked => "user_blocked",
            Self::UserUnblocked => "user_unblocked",
            Self::BenefactorGranted => "benefactor_granted",
            Self::BenefactorDeclined => "benefactor_declined",
            Self::BenefactorRequested => "benefactor_requested",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this kind is scoped to a fundraiser (and therefore carries
    /// the fundraiser id as its second topic).
    pub fn is_fundraiser_scoped(&self) -> bool {
        matches!(
            self,
            Self::FundraiserCreated
                | Self::DonationReceived
                | Self::CommentCreated
                | Self::FundsWithdrawn
                | Self::UpvoteToggled
        )
    }
}

/// A fully decoded platform event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdfundEvent {
    pub event_type: String,
    /// Present for fundraiser-scoped events; `None` for registry events.
    pub fundraiser_id: Option<String>,
    /// The acting or affected identity. Anonymized donations decode to
    /// `None`.
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub fundraiser_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
