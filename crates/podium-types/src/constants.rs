//! System-wide default thresholds.
//!
//! All of these are overridable through [`crate::TournamentConfig`].

use crate::Amount;

/// Entry fee every player must pay exactly, in smallest units.
pub const DEFAULT_ENTRY_FEE: Amount = 2;

/// Minimum number of distinct sponsors before registration may launch.
pub const DEFAULT_MIN_SPONSORS: usize = 3;

/// Minimum pooled donation total before registration may launch.
pub const DEFAULT_MIN_POOL: Amount = 8;

/// Minimum number of enrolled players before registration may close.
pub const DEFAULT_MIN_PLAYERS: usize = 8;
