//! # podium-types
//!
//! Shared types, errors, and configuration for the **Podium** tournament
//! escrow engine.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Money**: [`Amount`], [`PoolHolder`]
//! - **Phases**: [`RegistrationPhase`], [`CompetitionPhase`]
//! - **Events**: [`TournamentEvent`], [`EventRecord`]
//! - **Configuration**: [`TournamentConfig`], [`SponsorWindow`]
//! - **Errors**: [`PodiumError`] with `PD_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod funds;
pub mod ids;
pub mod phase;

// Re-export all primary types at crate root for ergonomic imports:
//   use podium_types::{ParticipantId, Amount, RegistrationPhase, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use funds::*;
pub use ids::*;
pub use phase::*;

// Constants are accessed via `podium_types::constants::FOO`
// (not re-exported to avoid name collisions).
