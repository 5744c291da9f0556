//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Card suit.
///
/// The declaration order only breaks ties when sorting cards of equal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in sort order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the glyph used when rendering this suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "♠",
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Self::Spades),
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Cards order by rank first and suit second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Rank of an ace.
    pub const ACE: u8 = 1;
    /// Rank of a jack.
    pub const JACK: u8 = 11;
    /// Rank of a queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a king.
    pub const KING: u8 = 13;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// when the rank comes from untrusted input.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a new card, rejecting ranks outside `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn try_new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < Self::ACE || rank > Self::KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(rank, suit))
    }

    /// Returns the value used when counting fifteens (face cards count as 10).
    #[must_use]
    pub const fn play_value(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Returns the rank symbol: `A`, `2` through `10`, `J`, `Q` or `K`.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit)
    }
}

fn parse_rank(s: &str) -> Option<u8> {
    match s {
        "A" | "a" => Some(Card::ACE),
        "T" | "t" => Some(10),
        "J" | "j" => Some(Card::JACK),
        "Q" | "q" => Some(Card::QUEEN),
        "K" | "k" => Some(Card::KING),
        _ => s.parse::<u8>().ok().filter(|rank| (2..=10).contains(rank)),
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards such as `"5♥"`, `"10d"`, `"JS"` or `"As"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_char(suit).ok_or(ParseCardError::UnknownSuit)?;
        let rank = parse_rank(chars.as_str()).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
