//! Hand and five-card scoring set representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::HandError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 4;

/// A four-card cribbage hand, kept in dealt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from four cards.
    #[must_use]
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in dealt order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns an iterator over the cards in dealt order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the shared suit if all four cards have the same suit.
    #[must_use]
    pub fn suit_if_uniform(&self) -> Option<Suit> {
        let suit = self.cards[0].suit;
        self.cards[1..]
            .iter()
            .all(|card| card.suit == suit)
            .then_some(suit)
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::WrongSize { found: cards.len() })?;
        Ok(Self::new(cards))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The hand plus the starter: the five cards every scoring category reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiveCardSet {
    /// Hand cards in dealt order, followed by the starter.
    cards: [Card; HAND_SIZE + 1],
}

impl FiveCardSet {
    /// Combines a hand and its starter.
    #[must_use]
    pub const fn new(hand: &Hand, starter: Card) -> Self {
        let [a, b, c, d] = hand.cards;
        Self {
            cards: [a, b, c, d, starter],
        }
    }

    /// Returns all five cards, hand first and starter last.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE + 1] {
        &self.cards
    }

    /// Returns the four hand cards.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.cards[..HAND_SIZE]
    }

    /// Returns the starter card.
    #[must_use]
    pub const fn starter(&self) -> Card {
        self.cards[HAND_SIZE]
    }

    /// Returns the five cards sorted by rank, then suit.
    #[must_use]
    pub fn sorted(&self) -> [Card; HAND_SIZE + 1] {
        let mut cards = self.cards;
        // Equal cards under `Ord` are identical, so this is observably stable.
        cards.sort_unstable();
        cards
    }
}
