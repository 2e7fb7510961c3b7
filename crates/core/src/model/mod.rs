mod rules;
mod sigil;
mod summary;

pub use rules::{GameRules, RulesError};
pub use sigil::{CHOICES_PER_ROUND, SigilPool, SigilPoolError};
pub use summary::{GameSummary, GameSummaryError};
