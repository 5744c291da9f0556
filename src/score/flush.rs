use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::options::HandKind;
use crate::report::{Category, ScoreEvent};

use super::Scorer;

impl Scorer {
    /// Emits a flush when all four hand cards share a suit, extended by the
    /// starter if it matches. The starter never creates a flush on its own.
    ///
    /// When counting the crib only the five-card flush scores.
    pub(super) fn flush(&self, hand: &Hand, starter: Card, events: &mut Vec<ScoreEvent>) {
        let Some(suit) = hand.suit_if_uniform() else {
            return;
        };

        let mut cards = hand.cards().to_vec();
        if starter.suit == suit {
            cards.push(starter);
        } else if self.options.kind == HandKind::Crib {
            return;
        }

        events.push(ScoreEvent::new(Category::Flush, cards));
    }
}
