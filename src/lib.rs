//! A cribbage hand scoring engine with optional `no_std` support.
//!
//! The crate scores a four-card [`Hand`] together with its starter card,
//! producing a [`ScoreReport`] that lists every fifteen, pair, run, flush and
//! nob found along with the total. A [`Deck`] is provided for dealing hands
//! from a seeded shuffle.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Hand, Suit, compute_score};
//!
//! let hand = Hand::new([
//!     Card::new(5, Suit::Hearts),
//!     Card::new(5, Suit::Clubs),
//!     Card::new(5, Suit::Diamonds),
//!     Card::new(11, Suit::Spades),
//! ]);
//! let report = compute_score(&hand, Card::new(5, Suit::Spades));
//! assert_eq!(report.total(), 29);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod report;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, HandError, ParseCardError};
pub use hand::{FiveCardSet, HAND_SIZE, Hand};
pub use options::{HandKind, ScoreOptions};
pub use report::{Category, ScoreEvent, ScoreReport};
pub use score::{Scorer, compute_score};
