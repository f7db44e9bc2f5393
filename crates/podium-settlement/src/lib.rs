//! # podium-settlement
//!
//! **Finality plane**: winner validation, exactly-once sponsor-pool payout,
//! exactly-once treasury refund, and the [`Tournament`] aggregate that ties
//! the registry, ledger, and phase controller together behind the public
//! operation surface.
//!
//! ## Control flow
//!
//! Every public operation is one atomic step:
//!
//! ```text
//! caller check → phase guard → role/amount checks → mutate → emit event
//! ```
//!
//! or it fails and leaves all state unchanged. No operation partially
//! applies. [`SharedTournament`] funnels concurrent access through a single
//! critical section so check-then-act sequences cannot race.

pub mod engine;
pub mod service;
pub mod tournament;

pub use engine::SettlementEngine;
pub use service::SharedTournament;
pub use tournament::Tournament;
