use alloc::vec::Vec;

use crate::card::Card;
use crate::report::{Category, ScoreEvent};

use super::{MIN_RUN, Scorer};

/// Whether the ranks of `cards` are distinct and consecutive. `cards` must
/// be sorted by rank, so a repeated rank fails the step test.
fn is_run(cards: &[Card]) -> bool {
    cards.len() >= MIN_RUN
        && cards
            .windows(2)
            .all(|w| w[1].rank.checked_sub(w[0].rank) == Some(1))
}

/// Include-first walk over every subset of `cards`, collecting the runs.
fn collect(cards: &[Card], chosen: &mut Vec<Card>, runs: &mut Vec<Vec<Card>>) {
    let Some((&card, rest)) = cards.split_first() else {
        if is_run(chosen) {
            runs.push(chosen.clone());
        }
        return;
    };

    chosen.push(card);
    collect(rest, chosen, runs);
    chosen.pop();

    collect(rest, chosen, runs);
}

impl Scorer {
    /// Emits one event per longest run. Shorter runs, including those
    /// nested inside a longer one, are not scored. `sorted` must be ordered
    /// by rank.
    pub(super) fn runs(&self, sorted: &[Card], events: &mut Vec<ScoreEvent>) {
        let mut runs = Vec::new();
        collect(sorted, &mut Vec::with_capacity(sorted.len()), &mut runs);

        // Stable, so equal-length runs keep their walk order.
        runs.sort_by(|a, b| b.len().cmp(&a.len()));
        let Some(longest) = runs.first().map(Vec::len) else {
            return;
        };

        events.extend(
            runs.into_iter()
                .take_while(|run| run.len() == longest)
                .map(|run| ScoreEvent::new(Category::Run, run)),
        );
    }
}
