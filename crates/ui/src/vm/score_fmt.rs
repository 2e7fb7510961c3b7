use quiz_core::model::GameSummary;

/// Verdict line for the summary overlay.
pub fn verdict_line(did_win: bool) -> &'static str {
    if did_win {
        "I drink and you know things"
    } else {
        "SHAME SHAME SHAME"
    }
}

/// Score line for the summary overlay.
#[must_use]
pub fn score_line(summary: &GameSummary) -> String {
    format!(
        "Your score: {} out of {}",
        summary.score(),
        summary.rounds_limit()
    )
}

/// One egg per point, the visual score track.
#[must_use]
pub fn egg_row(score: u32) -> String {
    "🥚".repeat(score as usize)
}
