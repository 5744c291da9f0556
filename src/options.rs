//! Scoring configuration options.

/// Which kind of hand is being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum HandKind {
    /// A player's own hand. A four-card flush in the hand scores.
    #[default]
    Hand,
    /// The dealer's crib. A flush scores only when the starter matches too.
    Crib,
}

/// Configuration options for scoring.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{HandKind, ScoreOptions};
///
/// let options = ScoreOptions::default().with_kind(HandKind::Crib);
/// assert_eq!(options.kind, HandKind::Crib);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreOptions {
    /// Kind of hand being counted.
    pub kind: HandKind,
}

impl ScoreOptions {
    /// Options for counting the crib.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{HandKind, ScoreOptions};
    ///
    /// assert_eq!(ScoreOptions::crib().kind, HandKind::Crib);
    /// ```
    #[must_use]
    pub const fn crib() -> Self {
        Self {
            kind: HandKind::Crib,
        }
    }

    /// Sets the kind of hand being counted.
    #[must_use]
    pub const fn with_kind(mut self, kind: HandKind) -> Self {
        self.kind = kind;
        self
    }
}
