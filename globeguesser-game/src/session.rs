//! Round progression state machine.
//!
//! A [`GameSession`] owns the catalog, the player's progress through it,
//! and the running score. Every mutation goes through one of the
//! transition methods; a rejected transition leaves the session exactly
//! as it was.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::catalog::{CatalogError, Round, RoundCatalog};
use crate::geo::{self, GeoPoint};
use crate::score;

/// Where the session currently sits in the round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to place (or move) a marker.
    Picking,
    /// A guess is staged and awaiting the player's go-ahead.
    Confirming,
    /// The round is scored and the result overlay is up.
    ShowingResult,
    /// All rounds played; only [`GameSession::restart`] leaves this state.
    Finished,
}

/// A scored, immutable record of one confirmed guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessAttempt {
    pub round_index: usize,
    pub guess: GeoPoint,
    pub target: GeoPoint,
    pub distance_km: f64,
    pub points: u32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested action is not legal in the current phase. Recovered
    /// locally; the session state is untouched.
    #[error("cannot {action} during the {phase:?} phase")]
    InvalidTransition {
        action: &'static str,
        phase: GamePhase,
    },
}

/// Failures a transition can surface.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// What [`GameSession::advance`] did with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the round at the contained index.
    NextRound(usize),
    /// Entered the terminal phase. `new_best` carries the record to
    /// persist when the finished total beat the previous best.
    Finished { new_best: Option<u32> },
}

/// One player's run through the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    catalog: RoundCatalog,
    current_index: usize,
    pending_guess: Option<GeoPoint>,
    attempts: SmallVec<[GuessAttempt; 4]>,
    total_score: u32,
    best_score: u32,
    phase: GamePhase,
}

impl GameSession {
    /// Fresh session over `catalog`, seeded with the persisted best
    /// score. The catalog must hold at least one round.
    #[must_use]
    pub fn new(catalog: RoundCatalog, best_score: u32) -> Self {
        debug_assert!(!catalog.is_empty(), "session needs at least one round");
        Self {
            catalog,
            current_index: 0,
            pending_guess: None,
            attempts: SmallVec::new(),
            total_score: 0,
            best_score,
            phase: GamePhase::Picking,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn pending_guess(&self) -> Option<GeoPoint> {
        self.pending_guess
    }

    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&GuessAttempt> {
        self.attempts.last()
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub const fn catalog(&self) -> &RoundCatalog {
        &self.catalog
    }

    /// Round the player is currently guessing (or viewing the result of).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::OutOfRange`] only if the session
    /// invariants were violated elsewhere.
    pub fn current_round(&self) -> Result<&Round, CatalogError> {
        self.catalog.get(self.current_index)
    }

    /// Stage a guess for the current round, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Rejected outside the `Picking` phase; map clicks that race a
    /// confirmation or result overlay are dropped this way.
    pub fn pick(&mut self, point: GeoPoint) -> Result<(), SessionError> {
        if self.phase != GamePhase::Picking {
            return Err(self.invalid("pick"));
        }
        self.pending_guess = Some(point);
        Ok(())
    }

    /// Ask for confirmation of the staged guess.
    ///
    /// # Errors
    ///
    /// Rejected outside `Picking`, or when no guess is staged yet.
    pub fn request_confirm(&mut self) -> Result<(), SessionError> {
        if self.phase != GamePhase::Picking || self.pending_guess.is_none() {
            return Err(self.invalid("request confirmation"));
        }
        self.phase = GamePhase::Confirming;
        Ok(())
    }

    /// Back out of the confirmation dialog. The staged guess survives so
    /// the player can still submit it.
    ///
    /// # Errors
    ///
    /// Rejected outside `Confirming`.
    pub fn cancel_confirm(&mut self) -> Result<(), SessionError> {
        if self.phase != GamePhase::Confirming {
            return Err(self.invalid("cancel confirmation"));
        }
        self.phase = GamePhase::Picking;
        Ok(())
    }

    /// Lock in the staged guess: score it, record the attempt, and move
    /// to the result view.
    ///
    /// # Errors
    ///
    /// Rejected outside `Confirming`. No partial attempt is ever
    /// recorded on failure.
    pub fn confirm(&mut self) -> Result<GuessAttempt, SessionError> {
        if self.phase != GamePhase::Confirming {
            return Err(self.invalid("confirm"));
        }
        let Some(guess) = self.pending_guess else {
            return Err(self.invalid("confirm"));
        };
        let target = self.catalog.get(self.current_index)?.location;
        let distance_km = geo::distance_km(guess, target);
        let attempt = GuessAttempt {
            round_index: self.current_index,
            guess,
            target,
            distance_km,
            points: score::points_for_distance(distance_km),
        };
        self.attempts.push(attempt.clone());
        self.total_score += attempt.points;
        self.phase = GamePhase::ShowingResult;
        Ok(attempt)
    }

    /// Leave the result view: either on to the next round, or into the
    /// terminal phase after the last one.
    ///
    /// # Errors
    ///
    /// Rejected outside `ShowingResult`.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.phase != GamePhase::ShowingResult {
            return Err(self.invalid("advance"));
        }
        self.pending_guess = None;
        if self.current_index + 1 < self.catalog.len() {
            self.current_index += 1;
            self.phase = GamePhase::Picking;
            return Ok(AdvanceOutcome::NextRound(self.current_index));
        }
        self.phase = GamePhase::Finished;
        let new_best = if self.total_score > self.best_score {
            self.best_score = self.total_score;
            Some(self.best_score)
        } else {
            None
        };
        Ok(AdvanceOutcome::Finished { new_best })
    }

    /// Reset to round zero from any phase. The best score is the
    /// all-time record and is not touched.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.pending_guess = None;
        self.attempts.clear();
        self.total_score = 0;
        self.phase = GamePhase::Picking;
    }

    const fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::Transition(TransitionError::InvalidTransition {
            action,
            phase: self.phase,
        })
    }
}
