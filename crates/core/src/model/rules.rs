use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RulesError {
    #[error("rounds limit must be > 0")]
    InvalidRoundsLimit,

    #[error("win threshold must be between 0 and 100 percent")]
    InvalidWinThreshold,
}

//
// ─── RULES ─────────────────────────────────────────────────────────────────────
//

/// Rule set for a quiz game.
///
/// Controls how many rounds a game lasts and the score percentage required
/// for the end-of-game verdict to count as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    rounds_limit: u32,
    win_threshold_percent: u32,
}

impl GameRules {
    /// Creates the standard rule set: 5 rounds, 80% needed to win.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rounds_limit: 5,
            win_threshold_percent: 80,
        }
    }

    /// Creates a custom rule set.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidRoundsLimit` if `rounds_limit` is zero and
    /// `RulesError::InvalidWinThreshold` if the threshold exceeds 100.
    pub fn new(rounds_limit: u32, win_threshold_percent: u32) -> Result<Self, RulesError> {
        if rounds_limit == 0 {
            return Err(RulesError::InvalidRoundsLimit);
        }
        if win_threshold_percent > 100 {
            return Err(RulesError::InvalidWinThreshold);
        }

        Ok(Self {
            rounds_limit,
            win_threshold_percent,
        })
    }

    // Accessors
    #[must_use]
    pub fn rounds_limit(&self) -> u32 {
        self.rounds_limit
    }

    #[must_use]
    pub fn win_threshold_percent(&self) -> u32 {
        self.win_threshold_percent
    }

    /// Score as a truncating integer percentage of the rounds limit.
    ///
    /// Multiplies before dividing, so 4 of 5 is 80%, not 0%.
    #[must_use]
    pub fn win_percent(&self, score: u32) -> u32 {
        score.saturating_mul(100) / self.rounds_limit
    }

    /// Whether the given final score meets the win threshold.
    #[must_use]
    pub fn is_win(&self, score: u32) -> bool {
        self.win_percent(score) >= self.win_threshold_percent
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
