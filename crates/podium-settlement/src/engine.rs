//! Settlement engine: irreversible fund transfers, exactly once.
//!
//! Two one-shot actions close out a tournament:
//! 1. `reward_winner`: the entire sponsor pool goes to the declared winner
//! 2. `refund_treasury`: the entire player-payment pool returns to the
//!    organizer, and only after the reward has been paid
//!
//! Each is latched by a boolean checked in the same `&mut self` step as
//! the transfer, so a repeat call can never re-read a stale flag and pay
//! twice. Validation happens in full before anything mutates.

use podium_phases::PhaseController;
use podium_roster::{IdentityRegistry, Ledger};
use podium_types::{CompetitionPhase, ParticipantId, PodiumError, Result, TournamentEvent};

/// Validates settlement targets and executes the two one-shot transfers.
pub struct SettlementEngine {
    /// The declared winner, set exactly once by a successful reward.
    winner: Option<ParticipantId>,
    /// Latch: the sponsor pool has been paid out.
    settled: bool,
    /// Latch: the player-payment pool has been refunded.
    treasury_returned: bool,
}

impl SettlementEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            winner: None,
            settled: false,
            treasury_returned: false,
        }
    }

    /// The declared winner, if settlement has happened.
    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        self.winner
    }

    /// Whether the sponsor pool has been paid out.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether the player-payment pool has been refunded.
    #[must_use]
    pub fn treasury_returned(&self) -> bool {
        self.treasury_returned
    }

    /// Whether both one-shot actions have completed. The instance is then
    /// dormant: every further settlement call is rejected.
    #[must_use]
    pub fn is_dormant(&self) -> bool {
        self.settled && self.treasury_returned
    }

    /// Pay the entire sponsor pool to `winner`, exactly once.
    ///
    /// The latch flip and the custody transfer happen in the same atomic
    /// step; a second call fails before touching the ledger.
    ///
    /// # Errors
    /// - `IllegalPhase` if the competition is not FINISHED
    /// - `UnknownPlayer` if `winner` is not a registered player
    /// - `AlreadySettled` if the pool was already paid out
    pub fn reward_winner(
        &mut self,
        registry: &IdentityRegistry,
        ledger: &mut Ledger,
        phases: &PhaseController,
        winner: ParticipantId,
    ) -> Result<TournamentEvent> {
        if phases.competition() != CompetitionPhase::Finished {
            return Err(PodiumError::IllegalPhase {
                reason: format!(
                    "cannot reward winner while tournament is {}",
                    phases.competition()
                ),
            });
        }
        if !registry.is_player(winner) {
            return Err(PodiumError::UnknownPlayer(winner));
        }
        if self.settled {
            return Err(PodiumError::AlreadySettled);
        }

        let reward = ledger.assign_sponsor_pool(winner)?;
        self.winner = Some(winner);
        self.settled = true;
        tracing::info!(%winner, reward, "sponsor pool paid out");

        Ok(TournamentEvent::WinnerRewarded { winner, reward })
    }

    /// Refund the entire player-payment pool to the organizer, exactly
    /// once, and only after the winner has been rewarded.
    ///
    /// # Errors
    /// - `IllegalPhase` if the winner has not been rewarded yet
    /// - `AlreadyRefunded` if the pool was already refunded
    pub fn refund_treasury(
        &mut self,
        registry: &IdentityRegistry,
        ledger: &mut Ledger,
    ) -> Result<TournamentEvent> {
        if !self.settled {
            return Err(PodiumError::IllegalPhase {
                reason: "winner not rewarded yet".into(),
            });
        }
        if self.treasury_returned {
            return Err(PodiumError::AlreadyRefunded);
        }

        let host = registry.organizer();
        let refund = ledger.assign_player_pool(host)?;
        self.treasury_returned = true;
        tracing::info!(%host, refund, "treasury refunded to organizer");

        Ok(TournamentEvent::TreasuryUpdated { host, refund })
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}
