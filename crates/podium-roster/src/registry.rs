//! Identity registry: role tracking and exclusivity.
//!
//! The registry knows three roles: one organizer (fixed at creation),
//! sponsors, and players. The three are mutually exclusive for the whole
//! lifetime of the instance; there is no removal operation.
//!
//! Checks are split from mutations (`ensure_new_*` vs `register_*`) so the
//! aggregate can validate every precondition of an operation before any
//! component mutates.

use std::collections::{HashMap, HashSet};

use podium_types::{ParticipantId, PodiumError, Result};

/// Tracks the organizer and the two disjoint participant sets.
pub struct IdentityRegistry {
    /// The single privileged identity, set once at creation.
    organizer: ParticipantId,
    /// Identities that contributed to the reward pool.
    sponsors: HashSet<ParticipantId>,
    /// Enrolled players, each with their opaque rank label.
    players: HashMap<ParticipantId, String>,
}

impl IdentityRegistry {
    /// Create a registry for a tournament run by `organizer`.
    #[must_use]
    pub fn new(organizer: ParticipantId) -> Self {
        Self {
            organizer,
            sponsors: HashSet::new(),
            players: HashMap::new(),
        }
    }

    /// The organizer identity.
    #[must_use]
    pub fn organizer(&self) -> ParticipantId {
        self.organizer
    }

    #[must_use]
    pub fn is_organizer(&self, id: ParticipantId) -> bool {
        id == self.organizer
    }

    #[must_use]
    pub fn is_sponsor(&self, id: ParticipantId) -> bool {
        self.sponsors.contains(&id)
    }

    #[must_use]
    pub fn is_player(&self, id: ParticipantId) -> bool {
        self.players.contains_key(&id)
    }

    /// The rank label a player enrolled with.
    #[must_use]
    pub fn rank_of(&self, id: ParticipantId) -> Option<&str> {
        self.players.get(&id).map(String::as_str)
    }

    /// Number of distinct sponsors.
    #[must_use]
    pub fn nb_sponsors(&self) -> usize {
        self.sponsors.len()
    }

    /// Number of enrolled players.
    #[must_use]
    pub fn nb_players(&self) -> usize {
        self.players.len()
    }

    /// Check that `id` may become a sponsor, without mutating anything.
    ///
    /// # Errors
    /// - `RoleConflict` if `id` is the organizer or a registered player
    /// - `DuplicateEntry` if `id` is already a sponsor
    pub fn ensure_new_sponsor(&self, id: ParticipantId) -> Result<()> {
        if self.is_organizer(id) {
            return Err(PodiumError::RoleConflict {
                reason: format!("{id} is the organizer and cannot sponsor"),
            });
        }
        if self.is_player(id) {
            return Err(PodiumError::RoleConflict {
                reason: format!("{id} is a player and cannot sponsor"),
            });
        }
        if self.is_sponsor(id) {
            return Err(PodiumError::DuplicateEntry(id));
        }
        Ok(())
    }

    /// Check that `id` may become a player, without mutating anything.
    ///
    /// # Errors
    /// - `RoleConflict` if `id` is the organizer or a registered sponsor
    /// - `DuplicateEntry` if `id` is already a player
    pub fn ensure_new_player(&self, id: ParticipantId) -> Result<()> {
        if self.is_organizer(id) {
            return Err(PodiumError::RoleConflict {
                reason: format!("{id} is the organizer and cannot play"),
            });
        }
        if self.is_sponsor(id) {
            return Err(PodiumError::RoleConflict {
                reason: format!("{id} is a sponsor and cannot play"),
            });
        }
        if self.is_player(id) {
            return Err(PodiumError::DuplicateEntry(id));
        }
        Ok(())
    }

    /// Add `id` to the sponsor set.
    ///
    /// # Errors
    /// Same conditions as [`Self::ensure_new_sponsor`].
    pub fn register_sponsor(&mut self, id: ParticipantId) -> Result<()> {
        self.ensure_new_sponsor(id)?;
        self.sponsors.insert(id);
        Ok(())
    }

    /// Add `id` to the player set with its rank label.
    ///
    /// # Errors
    /// - Same role conditions as [`Self::ensure_new_player`]
    /// - `MissingField` if `rank` is empty or whitespace
    pub fn register_player(&mut self, id: ParticipantId, rank: &str) -> Result<()> {
        self.ensure_new_player(id)?;
        if rank.trim().is_empty() {
            return Err(PodiumError::MissingField { field: "rank" });
        }
        self.players.insert(id, rank.to_string());
        Ok(())
    }

    /// Verify role exclusivity: the organizer belongs to neither set and
    /// no identity appears in both sets.
    ///
    /// # Errors
    /// Returns `RoleConflict` naming the offending identity.
    pub fn verify_exclusivity(&self) -> Result<()> {
        if self.sponsors.contains(&self.organizer) || self.players.contains_key(&self.organizer) {
            return Err(PodiumError::RoleConflict {
                reason: format!("organizer {} appears in a participant set", self.organizer),
            });
        }
        if let Some(id) = self.sponsors.iter().find(|id| self.players.contains_key(id)) {
            return Err(PodiumError::RoleConflict {
                reason: format!("{id} is both sponsor and player"),
            });
        }
        Ok(())
    }
}
