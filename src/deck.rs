//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};

/// A deck of cards. Cards are dealt from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled 52-card deck, suit by suit, ace to king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Card::ACE..=Card::KING {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a full deck shuffled by a generator seeded from `seed`.
    ///
    /// The same seed always produces the same order.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new();
        deck.shuffle(&mut rng);
        deck
    }

    /// Shuffles the remaining cards with the given generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::debug!("shuffled {} cards", self.cards.len());
    }

    /// Removes a specific card from the deck.
    ///
    /// Returns `false` if the card was not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        let Some(index) = self.cards.iter().position(|&c| c == card) else {
            return false;
        };
        self.cards.remove(index);
        true
    }

    /// Deals a hand from the end of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    pub fn deal_hand(&mut self) -> Result<Hand, DealError> {
        let at = self
            .cards
            .len()
            .checked_sub(HAND_SIZE)
            .ok_or(DealError::NotEnoughCards)?;
        let hand = Hand::try_from(&self.cards[at..]).map_err(|_| DealError::NotEnoughCards)?;
        self.cards.truncate(at);
        Ok(hand)
    }

    /// Cuts the starter: removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn cut_starter(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::NotEnoughCards)
    }

    /// Deals a hand and then cuts its starter.
    ///
    /// The deck is left untouched when it cannot supply both.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than five cards remain.
    pub fn deal(&mut self) -> Result<(Hand, Card), DealError> {
        if self.cards.len() < HAND_SIZE + 1 {
            return Err(DealError::NotEnoughCards);
        }
        let hand = self.deal_hand()?;
        let starter = self.cut_starter()?;
        log::debug!("dealt a hand with {} cards left", self.cards.len());
        Ok((hand, starter))
    }

    /// Returns the remaining cards. The last card is dealt first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
