//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::GameSummaryError;

/// Errors emitted by `RoundEngine`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error(transparent)]
    Summary(#[from] GameSummaryError),
}
