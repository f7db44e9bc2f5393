//! Phase types for the tournament's two lifecycle axes.
//!
//! Registration: **NOT_STARTED → OPENED → CLOSED**
//! Competition:  **NOT_STARTED → ONGOING → FINISHED**
//!
//! Both axes are strictly monotonic: a phase is never revisited and no
//! phase is skipped. The competition axis may only begin advancing once
//! registration has reached CLOSED. Guard logic lives in `podium-phases`;
//! these enums only model the states themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three phases of the registration axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationPhase {
    /// Sponsors may enroll; registration has not been launched.
    NotStarted,
    /// Players may enroll.
    Opened,
    /// Enrollment is over. Terminal for this axis.
    Closed,
}

impl fmt::Display for RegistrationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NOT_STARTED"),
            Self::Opened => write!(f, "OPENED"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// The three phases of the competition axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionPhase {
    /// The tournament has not begun.
    NotStarted,
    /// Play is in progress.
    Ongoing,
    /// Play is over; settlement may proceed. Terminal for this axis.
    Finished,
}

impl fmt::Display for CompetitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NOT_STARTED"),
            Self::Ongoing => write!(f, "ONGOING"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}
