//! Scoring engine.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{FiveCardSet, Hand};
use crate::options::ScoreOptions;
use crate::report::ScoreReport;

mod fifteens;
mod flush;
mod nob;
mod pairs;
mod runs;

/// Total fifteens are counted toward.
const FIFTEEN: u8 = 15;

/// Shortest sequence that counts as a run.
const MIN_RUN: usize = 3;

/// A cribbage hand scorer.
///
/// The scorer holds only its [`ScoreOptions`]; every call to
/// [`Scorer::score`] is independent, so one scorer can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scorer {
    /// Scoring options.
    pub options: ScoreOptions,
}

impl Scorer {
    /// Creates a scorer with the given options.
    #[must_use]
    pub const fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    /// Scores a hand together with its starter.
    ///
    /// Events are reported category by category in the order fifteens,
    /// pairs, runs, flush, nob.
    #[must_use]
    pub fn score(&self, hand: &Hand, starter: Card) -> ScoreReport {
        let set = FiveCardSet::new(hand, starter);
        let sorted = set.sorted();

        let mut events = Vec::new();
        self.fifteens(set.cards(), &mut events);
        self.pairs(&sorted, &mut events);
        self.runs(&sorted, &mut events);
        self.flush(hand, starter, &mut events);
        self.nob(hand, starter, &mut events);

        for event in &events {
            log::trace!("{event}");
        }
        let report = ScoreReport::new(events);
        log::debug!(
            "scored {} events for {} points",
            report.events().len(),
            report.total()
        );
        report
    }
}

/// Scores a hand with its starter under the default options.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Hand, Suit, compute_score};
///
/// let hand = Hand::new([
///     Card::new(2, Suit::Spades),
///     Card::new(2, Suit::Hearts),
///     Card::new(6, Suit::Spades),
///     Card::new(8, Suit::Hearts),
/// ]);
/// assert_eq!(compute_score(&hand, Card::new(10, Suit::Diamonds)).total(), 2);
/// ```
#[must_use]
pub fn compute_score(hand: &Hand, starter: Card) -> ScoreReport {
    Scorer::default().score(hand, starter)
}

