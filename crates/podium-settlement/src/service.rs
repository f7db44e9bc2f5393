//! Single-writer access to a shared tournament.
//!
//! The execution model is strictly serialized: one operation mutates the
//! singleton at a time and runs to completion before the next begins.
//! [`SharedTournament`] enforces that with one mutex around the aggregate,
//! so check-then-act sequences (authorization → phase → mutate → transfer)
//! cannot interleave.

use std::sync::{Arc, Mutex, PoisonError};

use podium_types::{ParticipantId, TournamentConfig};

use crate::tournament::Tournament;

/// A cloneable handle funneling all access through one critical section.
#[derive(Clone)]
pub struct SharedTournament {
    inner: Arc<Mutex<Tournament>>,
}

impl SharedTournament {
    #[must_use]
    pub fn new(organizer: ParticipantId, config: TournamentConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Tournament::new(organizer, config))),
        }
    }

    /// Run `f` with exclusive access to the tournament.
    ///
    /// A poisoned lock is recovered: failed operations never leave
    /// partial state, so the aggregate is consistent even after a caller
    /// panicked while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Tournament) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
