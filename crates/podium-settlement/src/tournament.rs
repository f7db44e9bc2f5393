//! The tournament aggregate: one instance, one competition.
//!
//! Owns all four components and exposes the public operation surface.
//! Caller identity is an explicit parameter of every operation; the
//! organizer check always runs first, then phase guards, then role and
//! amount checks, and only then does anything mutate. Each success appends
//! exactly one [`EventRecord`] to the ordered log and returns the event.

use podium_phases::PhaseController;
use podium_roster::{IdentityRegistry, Ledger};
use podium_types::{
    Amount, CompetitionPhase, EventRecord, ParticipantId, PodiumError, RegistrationPhase, Result,
    TournamentConfig, TournamentEvent,
};

use crate::engine::SettlementEngine;

/// Singleton aggregate owning all state for the lifetime of one
/// competition. Created once by the organizer; after both settlement and
/// treasury refund it stays dormant (every further mutation is rejected).
pub struct Tournament {
    config: TournamentConfig,
    registry: IdentityRegistry,
    ledger: Ledger,
    phases: PhaseController,
    engine: SettlementEngine,
    events: Vec<EventRecord>,
}

impl Tournament {
    /// Create a tournament run by `organizer`.
    #[must_use]
    pub fn new(organizer: ParticipantId, config: TournamentConfig) -> Self {
        Self {
            config,
            registry: IdentityRegistry::new(organizer),
            ledger: Ledger::new(),
            phases: PhaseController::new(),
            engine: SettlementEngine::new(),
            events: Vec::new(),
        }
    }

    fn ensure_organizer(&self, caller: ParticipantId) -> Result<()> {
        if self.registry.is_organizer(caller) {
            Ok(())
        } else {
            Err(PodiumError::Unauthorized { caller })
        }
    }

    /// Append the event atomically with the mutation that produced it and
    /// hand a copy back to the caller.
    fn commit(&mut self, event: TournamentEvent) -> TournamentEvent {
        let seq = self.events.len() as u64;
        self.events.push(EventRecord::new(seq, event.clone()));
        event
    }

    // =====================================================================
    // Enrollment
    // =====================================================================

    /// Enroll the caller as a sponsor with a donation to the reward pool.
    ///
    /// # Errors
    /// - `IllegalPhase` if the sponsorship window is shut
    /// - `RoleConflict` if the caller is the organizer or a player
    /// - `DuplicateEntry` if the caller already sponsors
    /// - `NonPositiveAmount` / `AmountOverflow` on bad amounts
    pub fn add_sponsor(
        &mut self,
        caller: ParticipantId,
        amount: Amount,
    ) -> Result<TournamentEvent> {
        self.phases.ensure_sponsor_window(&self.config)?;
        // Role checks come before amount checks: the organizer is turned
        // away whatever value they send.
        self.registry.ensure_new_sponsor(caller)?;
        let total_donation = self.ledger.record_donation(caller, amount)?;
        self.registry.register_sponsor(caller)?;

        Ok(self.commit(TournamentEvent::SponsorAdded {
            sponsor: caller,
            donation: amount,
            total_donation,
            nb_sponsors: self.registry.nb_sponsors(),
        }))
    }

    /// Enroll the caller as a player with their rank label and the exact
    /// entry fee.
    ///
    /// # Errors
    /// - `IllegalPhase` unless registration is OPENED
    /// - `RoleConflict` if the caller is the organizer or a sponsor
    /// - `DuplicateEntry` if the caller already plays
    /// - `MissingField` if `rank` is empty
    /// - `NonPositiveAmount` / `InvalidAmount` on bad payments
    pub fn add_player(
        &mut self,
        caller: ParticipantId,
        rank: &str,
        payment: Amount,
    ) -> Result<TournamentEvent> {
        self.phases.ensure_player_window()?;
        self.registry.ensure_new_player(caller)?;
        if rank.trim().is_empty() {
            return Err(PodiumError::MissingField { field: "rank" });
        }
        self.ledger
            .record_payment(caller, payment, self.config.entry_fee)?;
        self.registry.register_player(caller, rank)?;

        Ok(self.commit(TournamentEvent::PlayerAdded {
            player: caller,
            rank: rank.to_string(),
        }))
    }

    // =====================================================================
    // Phase transitions (organizer only)
    // =====================================================================

    /// Open player registration. Requires enough sponsors and pooled funds.
    pub fn launch_registration(&mut self, caller: ParticipantId) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let state = self.phases.launch_registration(
            self.registry.nb_sponsors(),
            self.ledger.total_donations(),
            &self.config,
        )?;
        Ok(self.commit(TournamentEvent::RegistrationStateChanged { state }))
    }

    /// Close player registration. Requires enough enrolled players.
    pub fn close_registration(&mut self, caller: ParticipantId) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let state = self
            .phases
            .close_registration(self.registry.nb_players(), &self.config)?;
        Ok(self.commit(TournamentEvent::RegistrationStateChanged { state }))
    }

    /// Start the competition. Requires registration CLOSED.
    pub fn start_tournament(&mut self, caller: ParticipantId) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let state = self.phases.start_competition()?;
        Ok(self.commit(TournamentEvent::TournamentStateChanged { state }))
    }

    /// End the competition.
    pub fn end_tournament(&mut self, caller: ParticipantId) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let state = self.phases.end_competition()?;
        Ok(self.commit(TournamentEvent::TournamentStateChanged { state }))
    }

    // =====================================================================
    // Settlement (organizer only)
    // =====================================================================

    /// Pay the entire sponsor pool to `winner`, exactly once.
    pub fn reward_winner(
        &mut self,
        caller: ParticipantId,
        winner: ParticipantId,
    ) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let event =
            self.engine
                .reward_winner(&self.registry, &mut self.ledger, &self.phases, winner)?;
        Ok(self.commit(event))
    }

    /// Refund the entire player-payment pool to the organizer, exactly
    /// once, after the reward has been paid.
    pub fn update_treasury(&mut self, caller: ParticipantId) -> Result<TournamentEvent> {
        self.ensure_organizer(caller)?;
        let event = self.engine.refund_treasury(&self.registry, &mut self.ledger)?;
        Ok(self.commit(event))
    }

    // =====================================================================
    // Queries (read-only, no event)
    // =====================================================================

    #[must_use]
    pub fn organizer(&self) -> ParticipantId {
        self.registry.organizer()
    }

    #[must_use]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Number of distinct sponsors.
    #[must_use]
    pub fn nb_sponsors(&self) -> usize {
        self.registry.nb_sponsors()
    }

    /// Number of enrolled players.
    #[must_use]
    pub fn nb_players(&self) -> usize {
        self.registry.nb_players()
    }

    /// Total pooled sponsor donations.
    #[must_use]
    pub fn donations_sponsors(&self) -> Amount {
        self.ledger.total_donations()
    }

    /// Total pooled player entry payments.
    #[must_use]
    pub fn payments_players(&self) -> Amount {
        self.ledger.total_player_payments()
    }

    #[must_use]
    pub fn donation_of(&self, id: ParticipantId) -> Option<Amount> {
        self.ledger.donation_of(id)
    }

    #[must_use]
    pub fn payment_of(&self, id: ParticipantId) -> Option<Amount> {
        self.ledger.payment_of(id)
    }

    #[must_use]
    pub fn rank_of(&self, id: ParticipantId) -> Option<&str> {
        self.registry.rank_of(id)
    }

    #[must_use]
    pub fn registration_phase(&self) -> RegistrationPhase {
        self.phases.registration()
    }

    #[must_use]
    pub fn tournament_phase(&self) -> CompetitionPhase {
        self.phases.competition()
    }

    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        self.engine.winner()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.engine.is_settled()
    }

    #[must_use]
    pub fn treasury_returned(&self) -> bool {
        self.engine.treasury_returned()
    }

    /// Whether both one-shot settlement actions have completed.
    #[must_use]
    pub fn is_dormant(&self) -> bool {
        self.engine.is_dormant()
    }

    /// The ordered, append-only event log.
    #[must_use]
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Verify every cross-component invariant: role exclusivity and value
    /// conservation. Intended for tests and audits; operations uphold
    /// these by construction.
    pub fn verify_invariants(&self) -> Result<()> {
        self.registry.verify_exclusivity()?;
        self.ledger.verify_conservation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_types::SponsorWindow;

    fn small_config() -> TournamentConfig {
        TournamentConfig {
            min_players: 4,
            ..TournamentConfig::default()
        }
    }

    fn setup() -> (Tournament, ParticipantId) {
        let organizer = ParticipantId::new();
        (Tournament::new(organizer, small_config()), organizer)
    }

    /// Drive the tournament to OPENED with three 4-unit sponsors.
    fn open_registration(t: &mut Tournament, organizer: ParticipantId) {
        for _ in 0..3 {
            t.add_sponsor(ParticipantId::new(), 4).unwrap();
        }
        t.launch_registration(organizer).unwrap();
    }

    #[test]
    fn sponsor_event_carries_running_totals() {
        let (mut t, _) = setup();
        let s1 = ParticipantId::new();
        let s2 = ParticipantId::new();

        let ev = t.add_sponsor(s1, 2).unwrap();
        assert_eq!(
            ev,
            TournamentEvent::SponsorAdded {
                sponsor: s1,
                donation: 2,
                total_donation: 2,
                nb_sponsors: 1,
            }
        );

        let ev = t.add_sponsor(s2, 3).unwrap();
        assert_eq!(
            ev,
            TournamentEvent::SponsorAdded {
                sponsor: s2,
                donation: 3,
                total_donation: 5,
                nb_sponsors: 2,
            }
        );
        assert_eq!(t.events().len(), 2);
        t.verify_invariants().unwrap();
    }

    #[test]
    fn organizer_rejected_as_sponsor_regardless_of_amount() {
        let (mut t, organizer) = setup();
        for amount in [0, 1, 100] {
            let err = t.add_sponsor(organizer, amount).unwrap_err();
            assert!(matches!(err, PodiumError::RoleConflict { .. }));
        }
        assert_eq!(t.nb_sponsors(), 0);
        assert!(t.events().is_empty());
    }

    #[test]
    fn failed_sponsor_leaves_no_partial_state() {
        let (mut t, _) = setup();
        let id = ParticipantId::new();

        // Zero amount: role checks pass, amount check fails, and the caller
        // must not end up half-registered.
        let err = t.add_sponsor(id, 0).unwrap_err();
        assert!(matches!(err, PodiumError::NonPositiveAmount));
        assert_eq!(t.nb_sponsors(), 0);
        assert_eq!(t.donations_sponsors(), 0);
        assert_eq!(t.donation_of(id), None);
        t.verify_invariants().unwrap();
    }

    #[test]
    fn player_enrollment_requires_open_registration() {
        let (mut t, organizer) = setup();
        let player = ParticipantId::new();

        let err = t.add_player(player, "30/5", 2).unwrap_err();
        assert!(matches!(err, PodiumError::IllegalPhase { .. }));

        open_registration(&mut t, organizer);
        let ev = t.add_player(player, "30/5", 2).unwrap();
        assert_eq!(
            ev,
            TournamentEvent::PlayerAdded {
                player,
                rank: "30/5".into()
            }
        );
        assert_eq!(t.rank_of(player), Some("30/5"));
        assert_eq!(t.payments_players(), 2);
    }

    #[test]
    fn wrong_fee_leaves_no_partial_state() {
        let (mut t, organizer) = setup();
        open_registration(&mut t, organizer);
        let player = ParticipantId::new();

        let err = t.add_player(player, "30/1", 5).unwrap_err();
        assert!(matches!(
            err,
            PodiumError::InvalidAmount {
                expected: 2,
                got: 5
            }
        ));
        assert_eq!(t.nb_players(), 0);
        assert_eq!(t.payments_players(), 0);
        t.verify_invariants().unwrap();
    }

    #[test]
    fn empty_rank_rejected_before_payment() {
        let (mut t, organizer) = setup();
        open_registration(&mut t, organizer);
        let player = ParticipantId::new();

        let err = t.add_player(player, "", 2).unwrap_err();
        assert!(matches!(err, PodiumError::MissingField { field: "rank" }));
        assert_eq!(t.payments_players(), 0);
    }

    #[test]
    fn non_organizer_cannot_drive_phases() {
        let (mut t, organizer) = setup();
        let stranger = ParticipantId::new();
        for _ in 0..3 {
            t.add_sponsor(ParticipantId::new(), 4).unwrap();
        }

        let err = t.launch_registration(stranger).unwrap_err();
        assert!(matches!(err, PodiumError::Unauthorized { caller } if caller == stranger));
        assert_eq!(t.registration_phase(), RegistrationPhase::NotStarted);

        t.launch_registration(organizer).unwrap();
        let err = t.close_registration(stranger).unwrap_err();
        assert!(matches!(err, PodiumError::Unauthorized { .. }));
    }

    #[test]
    fn sponsor_window_respects_config() {
        let organizer = ParticipantId::new();
        let mut t = Tournament::new(
            organizer,
            TournamentConfig {
                min_players: 4,
                sponsor_window: SponsorWindow::BeforeLaunchOnly,
                ..TournamentConfig::default()
            },
        );
        for _ in 0..3 {
            t.add_sponsor(ParticipantId::new(), 4).unwrap();
        }
        t.launch_registration(organizer).unwrap();

        let err = t.add_sponsor(ParticipantId::new(), 4).unwrap_err();
        assert!(matches!(err, PodiumError::IllegalPhase { .. }));
        assert_eq!(t.nb_sponsors(), 3);
    }

    #[test]
    fn event_log_orders_all_commits() {
        let (mut t, organizer) = setup();
        open_registration(&mut t, organizer);
        for i in 0..4 {
            t.add_player(ParticipantId::new(), &format!("30/{i}"), 2)
                .unwrap();
        }
        t.close_registration(organizer).unwrap();

        let log = t.events();
        assert_eq!(log.len(), 9); // 3 sponsors + launch + 4 players + close
        for (i, rec) in log.iter().enumerate() {
            assert_eq!(rec.seq, i as u64);
        }
        assert_eq!(
            log[8].event,
            TournamentEvent::RegistrationStateChanged {
                state: RegistrationPhase::Closed
            }
        );
    }
}
