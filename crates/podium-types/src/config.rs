//! Configuration for a tournament instance.

use serde::{Deserialize, Serialize};

use crate::{Amount, constants};

/// When sponsors are allowed to enroll, relative to the registration axis.
///
/// Some competition formats want the pool locked before players see it;
/// others accept late donations while enrollment runs. Either way,
/// sponsorship is always blocked once registration is CLOSED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorWindow {
    /// Sponsors may only enroll while registration is NOT_STARTED.
    BeforeLaunchOnly,
    /// Sponsors may enroll while registration is NOT_STARTED or OPENED.
    UntilClose,
}

/// Configuration for a single tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// The exact entry payment required from every player.
    pub entry_fee: Amount,
    /// Minimum distinct sponsors required to launch registration.
    pub min_sponsors: usize,
    /// Minimum pooled donations required to launch registration.
    pub min_pool: Amount,
    /// Minimum enrolled players required to close registration.
    pub min_players: usize,
    /// Sponsorship enrollment window policy.
    pub sponsor_window: SponsorWindow,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            entry_fee: constants::DEFAULT_ENTRY_FEE,
            min_sponsors: constants::DEFAULT_MIN_SPONSORS,
            min_pool: constants::DEFAULT_MIN_POOL,
            min_players: constants::DEFAULT_MIN_PLAYERS,
            sponsor_window: SponsorWindow::UntilClose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let cfg = TournamentConfig::default();
        assert_eq!(cfg.entry_fee, 2);
        assert_eq!(cfg.min_sponsors, 3);
        assert_eq!(cfg.min_pool, 8);
        assert_eq!(cfg.min_players, 8);
        assert_eq!(cfg.sponsor_window, SponsorWindow::UntilClose);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = TournamentConfig {
            min_players: 4,
            sponsor_window: SponsorWindow::BeforeLaunchOnly,
            ..TournamentConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TournamentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_players, 4);
        assert_eq!(back.sponsor_window, SponsorWindow::BeforeLaunchOnly);
    }
}
