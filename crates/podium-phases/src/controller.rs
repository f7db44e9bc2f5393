//! Phase controller: transitions and guards over the two lifecycle axes.
//!
//! Registration: NOT_STARTED → OPENED → CLOSED.
//! Competition:  NOT_STARTED → ONGOING → FINISHED, gated on registration
//! being CLOSED first.
//!
//! Every guard fails with `IllegalPhase` carrying a specific reason, so a
//! caller can tell "not opened yet" from "already closed" from "not enough
//! sponsors". A transition can never be taken twice: re-entering a left
//! state is itself an `IllegalPhase`.

use podium_types::{
    Amount, CompetitionPhase, PodiumError, RegistrationPhase, Result, SponsorWindow,
    TournamentConfig,
};

/// Two independent, monotonically-advancing phase machines.
pub struct PhaseController {
    registration: RegistrationPhase,
    competition: CompetitionPhase,
}

impl PhaseController {
    /// Start with both axes at NOT_STARTED.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registration: RegistrationPhase::NotStarted,
            competition: CompetitionPhase::NotStarted,
        }
    }

    /// Current registration phase.
    #[must_use]
    pub fn registration(&self) -> RegistrationPhase {
        self.registration
    }

    /// Current competition phase.
    #[must_use]
    pub fn competition(&self) -> CompetitionPhase {
        self.competition
    }

    fn illegal(reason: impl Into<String>) -> PodiumError {
        PodiumError::IllegalPhase {
            reason: reason.into(),
        }
    }

    /// NOT_STARTED → OPENED, once enough sponsors have pooled enough funds.
    ///
    /// # Errors
    /// `IllegalPhase` if registration already left NOT_STARTED, if fewer
    /// than `config.min_sponsors` sponsors are registered, or if
    /// `total_donations` is below `config.min_pool`.
    pub fn launch_registration(
        &mut self,
        nb_sponsors: usize,
        total_donations: Amount,
        config: &TournamentConfig,
    ) -> Result<RegistrationPhase> {
        match self.registration {
            RegistrationPhase::NotStarted => {}
            RegistrationPhase::Opened => {
                return Err(Self::illegal("registration already opened"));
            }
            RegistrationPhase::Closed => {
                return Err(Self::illegal("registration already closed"));
            }
        }
        if nb_sponsors < config.min_sponsors {
            return Err(Self::illegal(format!(
                "not enough sponsors: have {nb_sponsors}, need {}",
                config.min_sponsors
            )));
        }
        if total_donations < config.min_pool {
            return Err(Self::illegal(format!(
                "insufficient sponsor pool: have {total_donations}, need {}",
                config.min_pool
            )));
        }
        self.registration = RegistrationPhase::Opened;
        tracing::info!(phase = %self.registration, "registration launched");
        Ok(self.registration)
    }

    /// OPENED → CLOSED, once enough players have enrolled.
    ///
    /// # Errors
    /// `IllegalPhase` if registration is not OPENED or fewer than
    /// `config.min_players` players are enrolled.
    pub fn close_registration(
        &mut self,
        nb_players: usize,
        config: &TournamentConfig,
    ) -> Result<RegistrationPhase> {
        match self.registration {
            RegistrationPhase::Opened => {}
            RegistrationPhase::NotStarted => {
                return Err(Self::illegal("registration not opened yet"));
            }
            RegistrationPhase::Closed => {
                return Err(Self::illegal("registration already closed"));
            }
        }
        if nb_players < config.min_players {
            return Err(Self::illegal(format!(
                "not enough players: have {nb_players}, need {}",
                config.min_players
            )));
        }
        self.registration = RegistrationPhase::Closed;
        tracing::info!(phase = %self.registration, "registration closed");
        Ok(self.registration)
    }

    /// Competition NOT_STARTED → ONGOING. Requires registration CLOSED.
    ///
    /// # Errors
    /// `IllegalPhase` if registration has not closed or the competition
    /// axis already advanced.
    pub fn start_competition(&mut self) -> Result<CompetitionPhase> {
        if self.registration != RegistrationPhase::Closed {
            return Err(Self::illegal("registration not closed yet"));
        }
        match self.competition {
            CompetitionPhase::NotStarted => {}
            CompetitionPhase::Ongoing => {
                return Err(Self::illegal("tournament already started"));
            }
            CompetitionPhase::Finished => {
                return Err(Self::illegal("tournament already finished"));
            }
        }
        self.competition = CompetitionPhase::Ongoing;
        tracing::info!(phase = %self.competition, "tournament started");
        Ok(self.competition)
    }

    /// Competition ONGOING → FINISHED.
    ///
    /// # Errors
    /// `IllegalPhase` unless the competition is ONGOING.
    pub fn end_competition(&mut self) -> Result<CompetitionPhase> {
        match self.competition {
            CompetitionPhase::Ongoing => {}
            CompetitionPhase::NotStarted => {
                return Err(Self::illegal("tournament not started yet"));
            }
            CompetitionPhase::Finished => {
                return Err(Self::illegal("tournament already finished"));
            }
        }
        self.competition = CompetitionPhase::Finished;
        tracing::info!(phase = %self.competition, "tournament ended");
        Ok(self.competition)
    }

    /// Check that a sponsor may enroll right now.
    ///
    /// NOT_STARTED always admits sponsors; OPENED admits them only under
    /// [`SponsorWindow::UntilClose`]; CLOSED never does.
    ///
    /// # Errors
    /// `IllegalPhase` when the window is shut.
    pub fn ensure_sponsor_window(&self, config: &TournamentConfig) -> Result<()> {
        match self.registration {
            RegistrationPhase::NotStarted => Ok(()),
            RegistrationPhase::Opened => match config.sponsor_window {
                SponsorWindow::UntilClose => Ok(()),
                SponsorWindow::BeforeLaunchOnly => Err(Self::illegal(
                    "sponsorship window closed at registration launch",
                )),
            },
            RegistrationPhase::Closed => {
                Err(Self::illegal("registration closed: sponsorship is over"))
            }
        }
    }

    /// Check that a player may enroll right now: registration must be
    /// exactly OPENED.
    ///
    /// # Errors
    /// `IllegalPhase`, distinguishing "not opened yet" from "closed".
    pub fn ensure_player_window(&self) -> Result<()> {
        match self.registration {
            RegistrationPhase::Opened => Ok(()),
            RegistrationPhase::NotStarted => Err(Self::illegal("registration not opened yet")),
            RegistrationPhase::Closed => Err(Self::illegal("registration already closed")),
        }
    }
}

impl Default for PhaseController {
    fn default() -> Self {
        Self::new()
    }
}
