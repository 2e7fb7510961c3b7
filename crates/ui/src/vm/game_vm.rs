use quiz_core::model::{GameRules, GameSummary, SigilPool};
use services::{RoundEngine, RoundProgress};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    Choose(usize),
    PlayAgain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Continue,
    Finished,
}

/// View-model owning the round engine for the game screen.
///
/// The view reads snapshots through the accessors and mutates only through
/// [`GameVm::choose`] and [`GameVm::play_again`]; the engine itself is never
/// handed out.
pub struct GameVm {
    engine: RoundEngine,
}

impl GameVm {
    #[must_use]
    pub fn new(engine: RoundEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        self.engine.choices()
    }

    #[must_use]
    pub fn target_label(&self) -> &str {
        self.engine.target_label()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        self.engine.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.is_finished()
    }

    /// The end-of-game summary, once the final round has been played.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        if self.engine.is_finished() {
            self.engine.summary().ok()
        } else {
            None
        }
    }

    /// Submit the player's pick for the current round.
    ///
    /// The caller gates input while the summary overlay is up.
    pub fn choose(&mut self, index: usize) -> GameOutcome {
        self.engine.submit_choice(index);
        if self.engine.is_finished() {
            GameOutcome::Finished
        } else {
            GameOutcome::Continue
        }
    }

    /// Start a fresh game after the summary has been acknowledged.
    pub fn play_again(&mut self) {
        self.engine.reset();
    }
}

/// # Errors
///
/// Returns `ViewError::NoSigils` when the configured labels do not form a
/// valid pool.
pub fn start_game(labels: Vec<String>, rules: GameRules) -> Result<GameVm, ViewError> {
    let pool = SigilPool::new(labels).map_err(|_| ViewError::NoSigils)?;
    Ok(GameVm::new(RoundEngine::new(pool, rules)))
}
