//! # podium-roster
//!
//! **Participant plane**: identity roles and escrowed money.
//!
//! ## Architecture
//!
//! Two components, each the source of truth for its own state:
//! 1. **IdentityRegistry**: organizer identity plus the two disjoint
//!    participant sets (sponsors, players with rank labels)
//! 2. **Ledger**: per-participant donation and payment records,
//!    incrementally-maintained pool totals, and custody of both pools
//!    until settlement moves them out
//!
//! Membership is permanent: neither component has a removal operation.

pub mod ledger;
pub mod registry;

pub use ledger::Ledger;
pub use registry::IdentityRegistry;
