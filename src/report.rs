//! Score report types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// A scoring category, declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Cards whose play values sum to 15.
    Fifteen,
    /// Two or more cards of the same rank.
    Pair,
    /// Three or more cards of consecutive rank.
    Run,
    /// Hand cards sharing one suit.
    Flush,
    /// The jack matching the starter's suit.
    Nob,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Self; 5] = [Self::Fifteen, Self::Pair, Self::Run, Self::Flush, Self::Nob];
}

/// A single scoring combination and the cards that justify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEvent {
    /// The category scored.
    pub category: Category,
    /// The cards forming the combination.
    pub cards: Vec<Card>,
}

impl ScoreEvent {
    /// Creates a new event.
    #[must_use]
    pub const fn new(category: Category, cards: Vec<Card>) -> Self {
        Self { category, cards }
    }

    /// Returns the points this event is worth.
    ///
    /// A pair group of `n` cards holds `n * (n - 1) / 2` pairs at 2 points
    /// each, which gives 2, 6 and 12 for pairs, threes and fours.
    #[must_use]
    pub fn points(&self) -> u8 {
        let n = self.cards.len() as u8;
        match self.category {
            Category::Fifteen => 2,
            Category::Pair => n * n.saturating_sub(1),
            Category::Run | Category::Flush => n,
            Category::Nob => 1,
        }
    }

    fn describe(&self) -> &'static str {
        match (self.category, self.cards.len()) {
            (Category::Fifteen, _) => "fifteen",
            (Category::Pair, 3) => "threes",
            (Category::Pair, 4) => "fours",
            (Category::Pair, _) => "a pair",
            (Category::Run, _) => "the run",
            (Category::Flush, _) => "the flush",
            (Category::Nob, _) => "his nob",
        }
    }
}

struct Cards<'a>(&'a [Card]);

impl fmt::Display for Cards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cards = self.0.iter();
        if let Some(first) = cards.next() {
            write!(f, "{first}")?;
            for card in cards {
                write!(f, " {card}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ScoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for {} {}",
            self.points(),
            self.describe(),
            Cards(&self.cards)
        )
    }
}

/// The outcome of scoring one hand: every event found, plus the total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScoreReport {
    events: Vec<ScoreEvent>,
    total: u8,
}

impl ScoreReport {
    /// Builds a report, summing the points of all events.
    #[must_use]
    pub fn new(events: Vec<ScoreEvent>) -> Self {
        let total = events.iter().map(ScoreEvent::points).sum();
        Self { events, total }
    }

    /// Returns the events in report order.
    #[must_use]
    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    /// Returns the events of one category, in the order they were found.
    pub fn events_of(&self, category: Category) -> impl Iterator<Item = &ScoreEvent> {
        self.events
            .iter()
            .filter(move |event| event.category == category)
    }

    /// Returns the points scored in one category.
    #[must_use]
    pub fn points_for(&self, category: Category) -> u8 {
        self.events_of(category).map(ScoreEvent::points).sum()
    }

    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether nothing scored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the report, returning its events.
    #[must_use]
    pub fn into_events(self) -> Vec<ScoreEvent> {
        self.events
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut running = 0u8;
        for event in &self.events {
            running += event.points();
            let cards = Cards(&event.cards);
            match event.category {
                Category::Fifteen => writeln!(f, "Fifteen {running}: {cards}")?,
                Category::Nob => writeln!(f, "One for his nob {cards}, {running}")?,
                _ => writeln!(f, "{event}, {running}")?,
            }
        }
        write!(f, "Total {}", self.total)
    }
}
