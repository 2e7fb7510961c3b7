use thiserror::Error;

use crate::model::GameRules;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameSummaryError {
    #[error("score ({score}) exceeds the rounds limit ({limit})")]
    ScoreExceedsRounds { score: u32, limit: u32 },
}

/// Aggregate result for a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    score: u32,
    rules: GameRules,
}

impl GameSummary {
    /// Build a summary from a final score and the rules it was played under.
    ///
    /// # Errors
    ///
    /// Returns `GameSummaryError::ScoreExceedsRounds` if the score is higher
    /// than the game could have produced.
    pub fn new(score: u32, rules: GameRules) -> Result<Self, GameSummaryError> {
        if score > rules.rounds_limit() {
            return Err(GameSummaryError::ScoreExceedsRounds {
                score,
                limit: rules.rounds_limit(),
            });
        }

        Ok(Self { score, rules })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rounds_limit(&self) -> u32 {
        self.rules.rounds_limit()
    }

    #[must_use]
    pub fn win_percent(&self) -> u32 {
        self.rules.win_percent(self.score)
    }

    #[must_use]
    pub fn did_win(&self) -> bool {
        self.rules.is_win(self.score)
    }
}
