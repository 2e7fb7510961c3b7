mod game_vm;
mod score_fmt;

pub use game_vm::{GameIntent, GameOutcome, GameVm, start_game};
pub use score_fmt::{egg_row, score_line, verdict_line};
