//! Error types for card, hand, and deck operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
}

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card")]
    Empty,
    /// Rank symbol is not one of `A`, `2`-`10`, `T`, `J`, `Q`, `K`.
    #[error("unknown rank symbol")]
    UnknownRank,
    /// Suit symbol is not a suit glyph or one of `S`, `H`, `D`, `C`.
    #[error("unknown suit symbol")]
    UnknownSuit,
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand does not hold exactly four cards.
    #[error("a hand holds exactly 4 cards, got {found}")]
    WrongSize {
        /// Number of cards supplied.
        found: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
