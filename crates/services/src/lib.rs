#![forbid(unsafe_code)]

pub mod error;
pub mod rounds;

pub use error::EngineError;
pub use rounds::{RoundEngine, RoundProgress};
