use alloc::vec::Vec;

use crate::card::Card;
use crate::report::{Category, ScoreEvent};

use super::{FIFTEEN, Scorer};

/// Walks every subset of `cards`, taking the include branch of each card
/// before its exclude branch. A subset is emitted the moment adding a card
/// brings its play-value sum to exactly `target`.
fn collect(cards: &[Card], target: u8, chosen: &mut Vec<Card>, events: &mut Vec<ScoreEvent>) {
    let Some((&card, rest)) = cards.split_first() else {
        return;
    };

    match target.checked_sub(card.play_value()) {
        Some(0) => {
            let mut subset = chosen.clone();
            subset.push(card);
            events.push(ScoreEvent::new(Category::Fifteen, subset));
        }
        Some(remaining) => {
            chosen.push(card);
            collect(rest, remaining, chosen, events);
            chosen.pop();
        }
        None => {}
    }

    collect(rest, target, chosen, events);
}

impl Scorer {
    /// Emits one event per subset of the five cards summing to 15.
    pub(super) fn fifteens(&self, cards: &[Card], events: &mut Vec<ScoreEvent>) {
        let mut chosen = Vec::with_capacity(cards.len());
        collect(cards, FIFTEEN, &mut chosen, events);
    }
}
