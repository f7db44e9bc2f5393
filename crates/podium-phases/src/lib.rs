//! # podium-phases
//!
//! **Lifecycle plane**: the two monotonic phase axes and every guard that
//! decides which operation is legal in which phase combination.
//!
//! Pure state machine: no money, no identities. Callers feed in the
//! counts and totals the guards need; the controller only knows phases.

pub mod controller;

pub use controller::PhaseController;
