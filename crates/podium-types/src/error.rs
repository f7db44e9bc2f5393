//! Error types for the Podium tournament engine.
//!
//! All errors use the `PD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Role / identity errors
//! - 2xx: Monetary errors
//! - 3xx: Phase errors
//! - 4xx: Settlement errors
//!
//! Every failure is synchronous and leaves all tournament state exactly as
//! it was before the call.

use thiserror::Error;

use crate::{Amount, ParticipantId};

/// Central error enum for all Podium operations.
#[derive(Debug, Error)]
pub enum PodiumError {
    // =================================================================
    // Role / Identity Errors (1xx)
    // =================================================================
    /// The caller is not allowed to perform this operation.
    #[error("PD_ERR_100: Unauthorized: caller {caller} is not the organizer")]
    Unauthorized { caller: ParticipantId },

    /// The identity would violate organizer/sponsor/player exclusivity.
    #[error("PD_ERR_101: Role conflict: {reason}")]
    RoleConflict { reason: String },

    /// The identity is already registered in the same role.
    #[error("PD_ERR_102: Duplicate entry: {0} is already registered")]
    DuplicateEntry(ParticipantId),

    /// A required field was absent or empty.
    #[error("PD_ERR_103: Missing field: {field}")]
    MissingField { field: &'static str },

    // =================================================================
    // Monetary Errors (2xx)
    // =================================================================
    /// Donations and entry payments must be strictly positive.
    #[error("PD_ERR_200: Non-positive amount: donations and payments must be > 0")]
    NonPositiveAmount,

    /// The entry payment did not match the configured entry fee.
    #[error("PD_ERR_201: Invalid amount: expected entry fee {expected}, got {got}")]
    InvalidAmount { expected: Amount, got: Amount },

    /// A pool total would overflow the amount type.
    #[error("PD_ERR_202: Amount overflow while updating pool total")]
    AmountOverflow,

    /// A pool total diverged from the sum of its records.
    #[error("PD_ERR_203: Conservation violation: {reason}")]
    ConservationViolation { reason: String },

    // =================================================================
    // Phase Errors (3xx)
    // =================================================================
    /// The operation was invoked outside its legal phase window.
    #[error("PD_ERR_300: Illegal phase: {reason}")]
    IllegalPhase { reason: String },

    // =================================================================
    // Settlement Errors (4xx)
    // =================================================================
    /// The proposed winner is not a registered player.
    #[error("PD_ERR_400: Unknown player: {0}")]
    UnknownPlayer(ParticipantId),

    /// The sponsor pool has already been paid out (idempotency guard).
    #[error("PD_ERR_401: Sponsor pool already settled")]
    AlreadySettled,

    /// The player-payment pool has already been refunded (idempotency guard).
    #[error("PD_ERR_402: Treasury already refunded")]
    AlreadyRefunded,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PodiumError>;
