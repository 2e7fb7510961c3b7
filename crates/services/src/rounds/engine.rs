use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rng};

use quiz_core::model::{CHOICES_PER_ROUND, GameRules, GameSummary, SigilPool};

use super::progress::RoundProgress;
use crate::error::EngineError;

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// In-memory state machine for a single quiz game.
///
/// Owns the shuffled label order, the correct choice, the running score and
/// the round counter. Each round shows the first [`CHOICES_PER_ROUND`] labels
/// of the current order; the player submits the index they tapped and the
/// engine scores it, advances, and reshuffles until the rounds limit is hit.
///
/// The engine is synchronous and exclusively owned by its caller; all reads
/// are pull-based queries against the current state.
pub struct RoundEngine {
    labels: Vec<String>,
    correct_index: usize,
    score: u32,
    rounds_played: u32,
    rules: GameRules,
    rng: StdRng,
}

impl RoundEngine {
    /// Create a new engine and deal the first round.
    #[must_use]
    pub fn new(pool: SigilPool, rules: GameRules) -> Self {
        Self::with_rng(pool, rules, StdRng::from_rng(&mut rng()))
    }

    /// Create a new engine with an injected random source.
    ///
    /// Seeding the generator makes shuffles and answer picks reproducible in
    /// tests.
    #[must_use]
    pub fn with_rng(pool: SigilPool, rules: GameRules, rng: StdRng) -> Self {
        let mut engine = Self {
            labels: pool.into_labels(),
            correct_index: 0,
            score: 0,
            rounds_played: 0,
            rules,
            rng,
        };
        engine.choose_new_round();
        engine
    }

    // Accessors
    #[must_use]
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Index of the correct choice, always within [`CHOICES_PER_ROUND`].
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The labels offered this round, in display order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.labels[..CHOICES_PER_ROUND]
    }

    /// The label the player is asked to find.
    #[must_use]
    pub fn target_label(&self) -> &str {
        &self.labels[self.correct_index]
    }

    /// True once the rounds limit has been reached.
    ///
    /// The only way back to an in-progress game is [`RoundEngine::reset`].
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.rounds_played >= self.rules.rounds_limit()
    }

    /// Whether the current score meets the win threshold.
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.rules.is_win(self.score)
    }

    /// Returns a summary of the current round progress.
    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        RoundProgress {
            played: self.rounds_played,
            limit: self.rules.rounds_limit(),
            remaining: self.rules.rounds_limit().saturating_sub(self.rounds_played),
            is_finished: self.is_finished(),
        }
    }

    /// Build the end-of-game summary from the current score.
    ///
    /// # Errors
    ///
    /// Propagates `GameSummaryError` via `EngineError::Summary`; the engine's
    /// own invariants keep the score within the rounds limit, so this only
    /// fails if those are broken.
    pub fn summary(&self) -> Result<GameSummary, EngineError> {
        Ok(GameSummary::new(self.score, self.rules)?)
    }

    /// Consume the player's choice for the current round.
    ///
    /// A correct pick scores one point; a wrong pick costs one, floored at
    /// zero. The round counter advances either way, and a fresh round is
    /// dealt unless this was the last one.
    ///
    /// Caller contract: `selected_index` is one of the rendered choices and
    /// the game is still in progress. The presentation layer gates input once
    /// the game finishes.
    pub fn submit_choice(&mut self, selected_index: usize) {
        debug_assert!(
            selected_index < CHOICES_PER_ROUND,
            "choice index out of range: {selected_index}"
        );
        debug_assert!(!self.is_finished(), "choice submitted after the last round");

        if selected_index == self.correct_index {
            self.score += 1;
        } else if self.score > 0 {
            self.score -= 1;
        }

        self.rounds_played += 1;

        // The final board stays frozen for the summary overlay.
        if !self.is_finished() {
            self.choose_new_round();
        }
    }

    /// Deal a fresh round: reshuffle the labels and pick a new correct index.
    pub fn choose_new_round(&mut self) {
        self.labels.shuffle(&mut self.rng);
        self.correct_index = self.rng.random_range(0..CHOICES_PER_ROUND);
    }

    /// Start a new game: zero the score and round counter, deal a new round.
    pub fn reset(&mut self) {
        self.score = 0;
        self.rounds_played = 0;
        self.choose_new_round();
    }
}

impl fmt::Debug for RoundEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("labels_len", &self.labels.len())
            .field("correct_index", &self.correct_index)
            .field("score", &self.score)
            .field("rounds_played", &self.rounds_played)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
