use std::collections::HashSet;

use thiserror::Error;

/// Number of sigils offered to the player each round.
pub const CHOICES_PER_ROUND: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SigilPoolError {
    #[error("sigil labels cannot be empty")]
    EmptyLabel,

    #[error("duplicate sigil label: {label}")]
    DuplicateLabel { label: String },

    #[error("a sigil pool needs at least {CHOICES_PER_ROUND} labels, got {len}")]
    TooFewLabels { len: usize },
}

//
// ─── POOL ──────────────────────────────────────────────────────────────────────
//

/// Ordered pool of unique answer labels.
///
/// Every round shows the first [`CHOICES_PER_ROUND`] labels of the current
/// order, so the pool must always hold at least that many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigilPool {
    labels: Vec<String>,
}

impl SigilPool {
    /// Creates a pool from the given labels, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `SigilPoolError::EmptyLabel` for blank labels,
    /// `SigilPoolError::DuplicateLabel` for repeats after trimming, and
    /// `SigilPoolError::TooFewLabels` when fewer than [`CHOICES_PER_ROUND`]
    /// labels remain.
    pub fn new(labels: Vec<String>) -> Result<Self, SigilPoolError> {
        let mut trimmed = Vec::with_capacity(labels.len());
        let mut seen = HashSet::new();
        for label in labels {
            let label = label.trim().to_owned();
            if label.is_empty() {
                return Err(SigilPoolError::EmptyLabel);
            }
            if !seen.insert(label.clone()) {
                return Err(SigilPoolError::DuplicateLabel { label });
            }
            trimmed.push(label);
        }

        if trimmed.len() < CHOICES_PER_ROUND {
            return Err(SigilPoolError::TooFewLabels {
                len: trimmed.len(),
            });
        }

        Ok(Self { labels: trimmed })
    }

    /// The classic pool of Westerosi house sigils.
    #[must_use]
    pub fn westeros() -> Self {
        let labels = [
            "Arryn",
            "Baelish",
            "Baratheon",
            "Blackwood",
            "Clegane",
            "Frey",
            "Greyjoy",
            "Lannister",
            "Martell",
            "Manderly",
            "Stark",
            "Tyrell",
            "Tully",
            "Targaryen",
            "Umber",
        ];
        Self {
            labels: labels.iter().map(ToString::to_string).collect(),
        }
    }

    // Accessors
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
