//! Monetary types for the Podium escrow model.
//!
//! All amounts are expressed in the smallest indivisible unit of the
//! underlying value currency; fractional amounts do not exist. Total
//! updates always use checked arithmetic.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A monetary amount in smallest indivisible units.
pub type Amount = u64;

/// Who currently holds a pooled balance.
///
/// Both pools start in tournament custody and leave it exactly once:
/// the sponsor pool to the winner, the player pool back to the organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolHolder {
    /// Funds are escrowed by the tournament instance.
    Tournament,
    /// The sponsor pool has been paid out to the declared winner.
    Winner(ParticipantId),
    /// The player-payment pool has been refunded to the organizer.
    Organizer(ParticipantId),
}

impl PoolHolder {
    /// Whether the pool is still in tournament custody.
    #[must_use]
    pub fn is_escrowed(&self) -> bool {
        matches!(self, Self::Tournament)
    }
}
