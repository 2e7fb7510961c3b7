/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    pub played: u32,
    pub limit: u32,
    pub remaining: u32,
    pub is_finished: bool,
}
