//! Deals cribbage hands from a seeded deck and prints their scores.
//!
//! Usage: `cargo run --example deal_hand -- [seed] [hands]`

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{Deck, compute_score};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let hands = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1);

    println!("Seed {seed}");

    let mut deck = Deck::shuffled(seed);
    for round in 1..=hands {
        let (hand, starter) = match deck.deal() {
            Ok(deal) => deal,
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        };

        let cards: Vec<String> = hand.iter().map(ToString::to_string).collect();
        println!();
        println!("Hand {round}: {}  Starter: {starter}", cards.join(" "));
        println!("{}", compute_score(&hand, starter));
    }
}
