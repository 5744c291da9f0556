use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;
use crate::report::{Category, ScoreEvent};

use super::Scorer;

impl Scorer {
    /// Emits one for his nob when the hand holds the jack of the starter's
    /// suit.
    pub(super) fn nob(&self, hand: &Hand, starter: Card, events: &mut Vec<ScoreEvent>) {
        let nob = Card::new(Card::JACK, starter.suit);
        if let Some(&jack) = hand.iter().find(|&&card| card == nob) {
            events.push(ScoreEvent::new(Category::Nob, vec![jack]));
        }
    }
}
