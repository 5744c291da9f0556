use alloc::vec::Vec;

use crate::card::Card;
use crate::report::{Category, ScoreEvent};

use super::Scorer;

impl Scorer {
    /// Emits one event per rank held two or more times, in ascending rank
    /// order. `sorted` must be ordered by rank.
    pub(super) fn pairs(&self, sorted: &[Card], events: &mut Vec<ScoreEvent>) {
        events.extend(
            sorted
                .chunk_by(|a, b| a.rank == b.rank)
                .filter(|group| group.len() >= 2)
                .map(|group| ScoreEvent::new(Category::Pair, group.to_vec())),
        );
    }
}
