//! Escrow ledger: donation and payment accounting.
//!
//! Tracks per-sponsor donations and per-player entry payments, plus the
//! running totals for both pools. Totals are maintained incrementally for
//! O(1) reads and must never diverge from the sum over records; the
//! invariant is checkable with [`Ledger::verify_conservation`].
//!
//! Pooled funds are exclusively owned by the tournament instance until a
//! settlement or refund transfer executes. Custody is tracked per pool as
//! a [`PoolHolder`] and can change hands exactly once.

use std::collections::HashMap;

use podium_types::{Amount, ParticipantId, PodiumError, PoolHolder, Result};

/// Monetary accounting for one tournament.
pub struct Ledger {
    /// Per-sponsor donation amounts (strictly positive).
    donations: HashMap<ParticipantId, Amount>,
    /// Per-player entry payments (strictly positive).
    payments: HashMap<ParticipantId, Amount>,
    /// Incremental sum over `donations`.
    total_donations: Amount,
    /// Incremental sum over `payments`.
    total_payments: Amount,
    /// Current holder of the pooled sponsor donations.
    sponsor_pool: PoolHolder,
    /// Current holder of the pooled player payments.
    player_pool: PoolHolder,
}

impl Ledger {
    /// Create an empty ledger with both pools in tournament custody.
    #[must_use]
    pub fn new() -> Self {
        Self {
            donations: HashMap::new(),
            payments: HashMap::new(),
            total_donations: 0,
            total_payments: 0,
            sponsor_pool: PoolHolder::Tournament,
            player_pool: PoolHolder::Tournament,
        }
    }

    /// Record a sponsor donation and fold it into the running total.
    /// The store and the total update happen together or not at all.
    ///
    /// Returns the new running total.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if `amount` is zero
    /// - `DuplicateEntry` if `id` already has a recorded donation
    /// - `AmountOverflow` if the total would overflow
    pub fn record_donation(&mut self, id: ParticipantId, amount: Amount) -> Result<Amount> {
        if amount == 0 {
            return Err(PodiumError::NonPositiveAmount);
        }
        if self.donations.contains_key(&id) {
            return Err(PodiumError::DuplicateEntry(id));
        }
        let new_total = self
            .total_donations
            .checked_add(amount)
            .ok_or(PodiumError::AmountOverflow)?;

        self.donations.insert(id, amount);
        self.total_donations = new_total;
        Ok(new_total)
    }

    /// Record a player entry payment. The payment must match the
    /// tournament's entry fee exactly.
    ///
    /// Returns the new running total.
    ///
    /// # Errors
    /// - `NonPositiveAmount` if `amount` is zero
    /// - `InvalidAmount` if `amount` differs from `expected_fee`
    /// - `DuplicateEntry` if `id` already has a recorded payment
    /// - `AmountOverflow` if the total would overflow
    pub fn record_payment(
        &mut self,
        id: ParticipantId,
        amount: Amount,
        expected_fee: Amount,
    ) -> Result<Amount> {
        if amount == 0 {
            return Err(PodiumError::NonPositiveAmount);
        }
        if amount != expected_fee {
            return Err(PodiumError::InvalidAmount {
                expected: expected_fee,
                got: amount,
            });
        }
        if self.payments.contains_key(&id) {
            return Err(PodiumError::DuplicateEntry(id));
        }
        let new_total = self
            .total_payments
            .checked_add(amount)
            .ok_or(PodiumError::AmountOverflow)?;

        self.payments.insert(id, amount);
        self.total_payments = new_total;
        Ok(new_total)
    }

    /// Sum of all sponsor donations.
    #[must_use]
    pub fn total_donations(&self) -> Amount {
        self.total_donations
    }

    /// Sum of all player entry payments.
    #[must_use]
    pub fn total_player_payments(&self) -> Amount {
        self.total_payments
    }

    /// The donation recorded for a sponsor, if any.
    #[must_use]
    pub fn donation_of(&self, id: ParticipantId) -> Option<Amount> {
        self.donations.get(&id).copied()
    }

    /// The payment recorded for a player, if any.
    #[must_use]
    pub fn payment_of(&self, id: ParticipantId) -> Option<Amount> {
        self.payments.get(&id).copied()
    }

    /// Current holder of the sponsor pool.
    #[must_use]
    pub fn sponsor_pool_holder(&self) -> PoolHolder {
        self.sponsor_pool
    }

    /// Current holder of the player-payment pool.
    #[must_use]
    pub fn player_pool_holder(&self) -> PoolHolder {
        self.player_pool
    }

    /// Move the entire sponsor pool out of tournament custody to the
    /// winner. Returns the transferred amount.
    ///
    /// # Errors
    /// Returns `AlreadySettled` if the pool has already left custody.
    pub fn assign_sponsor_pool(&mut self, winner: ParticipantId) -> Result<Amount> {
        if !self.sponsor_pool.is_escrowed() {
            return Err(PodiumError::AlreadySettled);
        }
        self.sponsor_pool = PoolHolder::Winner(winner);
        Ok(self.total_donations)
    }

    /// Move the entire player-payment pool out of tournament custody to
    /// the organizer. Returns the transferred amount.
    ///
    /// # Errors
    /// Returns `AlreadyRefunded` if the pool has already left custody.
    pub fn assign_player_pool(&mut self, organizer: ParticipantId) -> Result<Amount> {
        if !self.player_pool.is_escrowed() {
            return Err(PodiumError::AlreadyRefunded);
        }
        self.player_pool = PoolHolder::Organizer(organizer);
        Ok(self.total_payments)
    }

    /// Verify that both incremental totals equal the sum over their
    /// records and that every recorded amount is strictly positive.
    ///
    /// # Errors
    /// Returns [`PodiumError::ConservationViolation`] naming the pool.
    pub fn verify_conservation(&self) -> Result<()> {
        let donation_sum: Amount = self.donations.values().sum();
        if donation_sum != self.total_donations {
            tracing::warn!(
                expected = self.total_donations,
                actual = donation_sum,
                "sponsor pool conservation violated"
            );
            return Err(PodiumError::ConservationViolation {
                reason: format!(
                    "sponsor pool: records sum to {donation_sum}, total is {}",
                    self.total_donations
                ),
            });
        }
        let payment_sum: Amount = self.payments.values().sum();
        if payment_sum != self.total_payments {
            tracing::warn!(
                expected = self.total_payments,
                actual = payment_sum,
                "player pool conservation violated"
            );
            return Err(PodiumError::ConservationViolation {
                reason: format!(
                    "player pool: records sum to {payment_sum}, total is {}",
                    self.total_payments
                ),
            });
        }
        if self.donations.values().any(|&a| a == 0) || self.payments.values().any(|&a| a == 0) {
            return Err(PodiumError::ConservationViolation {
                reason: "zero-amount record present".into(),
            });
        }
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: Amount = 2;

    #[test]
    fn donations_accumulate() {
        let mut ledger = Ledger::new();
        let s1 = ParticipantId::new();
        let s2 = ParticipantId::new();

        assert_eq!(ledger.record_donation(s1, 2).unwrap(), 2);
        assert_eq!(ledger.record_donation(s2, 3).unwrap(), 5);
        assert_eq!(ledger.total_donations(), 5);
        assert_eq!(ledger.donation_of(s1), Some(2));
        assert_eq!(ledger.donation_of(s2), Some(3));
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn zero_donation_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger.record_donation(ParticipantId::new(), 0).unwrap_err();
        assert!(matches!(err, PodiumError::NonPositiveAmount));
        assert_eq!(ledger.total_donations(), 0);
    }

    #[test]
    fn duplicate_donation_rejected() {
        let mut ledger = Ledger::new();
        let id = ParticipantId::new();
        ledger.record_donation(id, 2).unwrap();

        let err = ledger.record_donation(id, 3).unwrap_err();
        assert!(matches!(err, PodiumError::DuplicateEntry(d) if d == id));
        // Totals unchanged
        assert_eq!(ledger.total_donations(), 2);
        assert_eq!(ledger.donation_of(id), Some(2));
    }

    #[test]
    fn donation_overflow_rejected() {
        let mut ledger = Ledger::new();
        ledger
            .record_donation(ParticipantId::new(), Amount::MAX)
            .unwrap();
        let err = ledger.record_donation(ParticipantId::new(), 1).unwrap_err();
        assert!(matches!(err, PodiumError::AmountOverflow));
        assert_eq!(ledger.total_donations(), Amount::MAX);
        ledger.verify_conservation().unwrap();
    }

    #[test]
    fn payment_must_match_fee() {
        let mut ledger = Ledger::new();
        let id = ParticipantId::new();

        let err = ledger.record_payment(id, 3, FEE).unwrap_err();
        assert!(matches!(
            err,
            PodiumError::InvalidAmount {
                expected: 2,
                got: 3
            }
        ));

        let err = ledger.record_payment(id, 0, FEE).unwrap_err();
        assert!(matches!(err, PodiumError::NonPositiveAmount));

        ledger.record_payment(id, FEE, FEE).unwrap();
        assert_eq!(ledger.total_player_payments(), FEE);
        assert_eq!(ledger.payment_of(id), Some(FEE));
    }

    #[test]
    fn duplicate_payment_rejected() {
        let mut ledger = Ledger::new();
        let id = ParticipantId::new();
        ledger.record_payment(id, FEE, FEE).unwrap();

        let err = ledger.record_payment(id, FEE, FEE).unwrap_err();
        assert!(matches!(err, PodiumError::DuplicateEntry(d) if d == id));
        assert_eq!(ledger.total_player_payments(), FEE);
    }

    #[test]
    fn sponsor_pool_leaves_custody_once() {
        let mut ledger = Ledger::new();
        ledger.record_donation(ParticipantId::new(), 10).unwrap();
        let winner = ParticipantId::new();

        assert!(ledger.sponsor_pool_holder().is_escrowed());
        let paid = ledger.assign_sponsor_pool(winner).unwrap();
        assert_eq!(paid, 10);
        assert_eq!(ledger.sponsor_pool_holder(), PoolHolder::Winner(winner));

        let err = ledger.assign_sponsor_pool(winner).unwrap_err();
        assert!(matches!(err, PodiumError::AlreadySettled));
        // Records untouched by the transfer
        assert_eq!(ledger.total_donations(), 10);
    }

    #[test]
    fn player_pool_leaves_custody_once() {
        let mut ledger = Ledger::new();
        ledger
            .record_payment(ParticipantId::new(), FEE, FEE)
            .unwrap();
        let organizer = ParticipantId::new();

        let refunded = ledger.assign_player_pool(organizer).unwrap();
        assert_eq!(refunded, FEE);
        assert_eq!(
            ledger.player_pool_holder(),
            PoolHolder::Organizer(organizer)
        );

        let err = ledger.assign_player_pool(organizer).unwrap_err();
        assert!(matches!(err, PodiumError::AlreadyRefunded));
    }

    #[test]
    fn pools_are_independent() {
        let mut ledger = Ledger::new();
        ledger.record_donation(ParticipantId::new(), 4).unwrap();
        ledger
            .record_payment(ParticipantId::new(), FEE, FEE)
            .unwrap();

        ledger.assign_sponsor_pool(ParticipantId::new()).unwrap();
        assert!(ledger.player_pool_holder().is_escrowed());
        ledger.assign_player_pool(ParticipantId::new()).unwrap();
    }

    #[test]
    fn empty_ledger_conserves() {
        let ledger = Ledger::new();
        ledger.verify_conservation().unwrap();
        assert_eq!(ledger.total_donations(), 0);
        assert_eq!(ledger.total_player_payments(), 0);
        assert_eq!(ledger.donation_of(ParticipantId::new()), None);
        assert_eq!(ledger.payment_of(ParticipantId::new()), None);
    }
}
