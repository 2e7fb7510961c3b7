use thiserror::Error;

use crate::model::{GameSummaryError, RulesError, SigilPoolError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    SigilPool(#[from] SigilPoolError),
    #[error(transparent)]
    Summary(#[from] GameSummaryError),
}
