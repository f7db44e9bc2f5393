//! Domain events for the Podium audit trail.
//!
//! Every successful public operation emits exactly one [`TournamentEvent`],
//! appended to an ordered log atomically with the state mutation that
//! produced it. Rejected operations emit nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, CompetitionPhase, ParticipantId, RegistrationPhase};

/// One domain event per public operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentEvent {
    /// A sponsor joined and donated to the reward pool.
    SponsorAdded {
        sponsor: ParticipantId,
        donation: Amount,
        total_donation: Amount,
        nb_sponsors: usize,
    },
    /// A player enrolled with their rank label.
    PlayerAdded {
        player: ParticipantId,
        rank: String,
    },
    /// The registration axis advanced.
    RegistrationStateChanged { state: RegistrationPhase },
    /// The competition axis advanced.
    TournamentStateChanged { state: CompetitionPhase },
    /// The full sponsor pool was paid out to the winner.
    WinnerRewarded {
        winner: ParticipantId,
        reward: Amount,
    },
    /// The full player-payment pool was refunded to the organizer.
    TreasuryUpdated {
        host: ParticipantId,
        refund: Amount,
    },
}

impl TournamentEvent {
    /// Short uppercase tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SponsorAdded { .. } => "SPONSOR_ADDED",
            Self::PlayerAdded { .. } => "PLAYER_ADDED",
            Self::RegistrationStateChanged { .. } => "REGISTRATION_STATE_CHANGED",
            Self::TournamentStateChanged { .. } => "TOURNAMENT_STATE_CHANGED",
            Self::WinnerRewarded { .. } => "WINNER_REWARDED",
            Self::TreasuryUpdated { .. } => "TREASURY_UPDATED",
        }
    }
}

/// An entry in the append-only event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at 0.
    pub seq: u64,
    /// When the event was committed.
    pub recorded_at: DateTime<Utc>,
    /// The event payload.
    pub event: TournamentEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(seq: u64, event: TournamentEvent) -> Self {
        Self {
            seq,
            recorded_at: Utc::now(),
            event,
        }
    }
}
