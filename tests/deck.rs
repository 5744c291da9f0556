//! Card, hand, and deck integration tests.

use std::collections::HashSet;

use cribrs::{
    Card, CardError, DECK_SIZE, DealError, Deck, FiveCardSet, Hand, HandError, ParseCardError,
    Suit,
};

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn cards_order_by_rank_then_suit() {
    assert!(card(2, Suit::Clubs) < card(3, Suit::Spades));
    assert!(card(11, Suit::Spades) < card(11, Suit::Hearts));
    assert!(card(11, Suit::Diamonds) < card(11, Suit::Clubs));
    assert_eq!(card(5, Suit::Hearts), card(5, Suit::Hearts));
    assert_ne!(card(5, Suit::Hearts), card(5, Suit::Clubs));
}

#[test]
fn play_value_caps_face_cards() {
    assert_eq!(card(1, Suit::Spades).play_value(), 1);
    assert_eq!(card(9, Suit::Spades).play_value(), 9);
    assert_eq!(card(10, Suit::Spades).play_value(), 10);
    assert_eq!(card(11, Suit::Spades).play_value(), 10);
    assert_eq!(card(13, Suit::Spades).play_value(), 10);
}

#[test]
fn try_new_rejects_bad_ranks() {
    assert_eq!(
        Card::try_new(0, Suit::Hearts).unwrap_err(),
        CardError::InvalidRank(0)
    );
    assert_eq!(
        Card::try_new(14, Suit::Hearts).unwrap_err(),
        CardError::InvalidRank(14)
    );
    assert_eq!(Card::try_new(13, Suit::Hearts), Ok(card(13, Suit::Hearts)));
}

#[test]
fn cards_render_with_rank_and_suit_symbols() {
    assert_eq!(card(1, Suit::Spades).to_string(), "A♠");
    assert_eq!(card(10, Suit::Hearts).to_string(), "10♥");
    assert_eq!(card(11, Suit::Diamonds).to_string(), "J♦");
    assert_eq!(card(13, Suit::Clubs).to_string(), "K♣");
}

#[test]
fn cards_parse_from_text() {
    assert_eq!("5♥".parse::<Card>(), Ok(card(5, Suit::Hearts)));
    assert_eq!("10d".parse::<Card>(), Ok(card(10, Suit::Diamonds)));
    assert_eq!("TD".parse::<Card>(), Ok(card(10, Suit::Diamonds)));
    assert_eq!("JS".parse::<Card>(), Ok(card(11, Suit::Spades)));
    assert_eq!(" as ".parse::<Card>(), Ok(card(1, Suit::Spades)));
    assert_eq!("Kc".parse::<Card>(), Ok(card(13, Suit::Clubs)));

    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("5x".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("1h".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("11h".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("h".parse::<Card>(), Err(ParseCardError::UnknownRank));
}

#[test]
fn rendered_cards_parse_back() {
    for card in Deck::new().cards() {
        assert_eq!(card.to_string().parse::<Card>(), Ok(*card));
    }
}

#[test]
fn hands_must_hold_four_cards() {
    let cards = [
        card(2, Suit::Spades),
        card(3, Suit::Spades),
        card(4, Suit::Spades),
        card(5, Suit::Spades),
        card(6, Suit::Spades),
    ];

    assert_eq!(
        Hand::try_from(&cards[..3]).unwrap_err(),
        HandError::WrongSize { found: 3 }
    );
    assert_eq!(
        Hand::try_from(cards.to_vec()).unwrap_err(),
        HandError::WrongSize { found: 5 }
    );
    assert_eq!(
        Hand::try_from(Vec::new()).unwrap_err(),
        HandError::WrongSize { found: 0 }
    );

    let hand = Hand::try_from(&cards[..4]).unwrap();
    assert_eq!(hand.cards(), &[cards[0], cards[1], cards[2], cards[3]]);
    assert_eq!(hand.suit_if_uniform(), Some(Suit::Spades));
}

#[test]
fn five_card_set_keeps_hand_order_and_sorts_on_request() {
    let hand = Hand::new([
        card(9, Suit::Clubs),
        card(2, Suit::Hearts),
        card(9, Suit::Spades),
        card(4, Suit::Diamonds),
    ]);
    let set = FiveCardSet::new(&hand, card(1, Suit::Clubs));

    assert_eq!(set.hand(), hand.cards());
    assert_eq!(set.starter(), card(1, Suit::Clubs));
    assert_eq!(
        set.sorted(),
        [
            card(1, Suit::Clubs),
            card(2, Suit::Hearts),
            card(4, Suit::Diamonds),
            card(9, Suit::Spades),
            card(9, Suit::Clubs),
        ]
    );
    assert_eq!(hand.suit_if_uniform(), None);
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(deck.cards()[0], card(1, Suit::Spades));
    assert_eq!(deck.cards()[DECK_SIZE - 1], card(13, Suit::Clubs));
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    assert_eq!(Deck::shuffled(42), Deck::shuffled(42));
    assert_ne!(Deck::shuffled(42), Deck::shuffled(43));

    let mut sorted = Deck::shuffled(7).cards().to_vec();
    sorted.sort();
    let mut expected = Deck::new().cards().to_vec();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn deal_takes_hand_then_starter_from_the_end() {
    let mut deck = Deck::new();
    let (hand, starter) = deck.deal().unwrap();

    assert_eq!(
        hand.cards(),
        &[
            card(10, Suit::Clubs),
            card(11, Suit::Clubs),
            card(12, Suit::Clubs),
            card(13, Suit::Clubs),
        ]
    );
    assert_eq!(starter, card(9, Suit::Clubs));
    assert_eq!(deck.len(), DECK_SIZE - 5);
}

#[test]
fn dealing_a_short_deck_fails_without_losing_cards() {
    let mut deck = Deck::new();
    while deck.len() > 4 {
        deck.cut_starter().unwrap();
    }

    assert_eq!(deck.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(deck.len(), 4);

    deck.deal_hand().unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.deal_hand().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(deck.cut_starter().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn removed_cards_are_never_dealt() {
    let mut deck = Deck::shuffled(3);
    let jack = card(11, Suit::Hearts);

    assert!(deck.remove(jack));
    assert!(!deck.remove(jack));
    assert_eq!(deck.len(), DECK_SIZE - 1);

    while let Ok((hand, starter)) = deck.deal() {
        assert!(!hand.cards().contains(&jack));
        assert_ne!(starter, jack);
    }
}
