#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::Error;
pub use model::{
    CHOICES_PER_ROUND, GameRules, GameSummary, GameSummaryError, RulesError, SigilPool,
    SigilPoolError,
};
