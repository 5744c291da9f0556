use cribrs::{Card, Category, Deck, Hand, ScoreEvent, ScoreReport, Suit, compute_score};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmDeck {
    deck: Deck,
}

#[wasm_bindgen]
impl WasmDeck {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            deck: Deck::shuffled(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.deck = Deck::shuffled(seed as u64);
    }

    pub fn cards_remaining(&self) -> u32 {
        self.deck.len() as u32
    }

    /// Deals a hand and starter and returns them with their score.
    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let (hand, starter) = self.deck.deal().map_err(js_err)?;
        to_js_value(&JsDeal::new(&hand, starter))
    }
}

/// Scores a hand given as four card strings (e.g. `"5h"`, `"J♠"`) and a starter.
#[wasm_bindgen]
pub fn score_hand(hand: Vec<String>, starter: &str) -> Result<JsValue, JsValue> {
    let cards = hand
        .iter()
        .map(|card| card.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(js_err)?;
    let hand = Hand::try_from(cards).map_err(js_err)?;
    let starter = starter.parse::<Card>().map_err(js_err)?;
    to_js_value(&JsDeal::new(&hand, starter))
}

#[derive(Serialize)]
struct JsDeal {
    hand: Vec<JsCard>,
    starter: JsCard,
    report: JsReport,
}

impl JsDeal {
    fn new(hand: &Hand, starter: Card) -> Self {
        Self {
            hand: hand.iter().copied().map(card_to_js).collect(),
            starter: card_to_js(starter),
            report: JsReport::from(compute_score(hand, starter)),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsEvent {
    category: &'static str,
    cards: Vec<JsCard>,
    points: u8,
}

impl From<&ScoreEvent> for JsEvent {
    fn from(event: &ScoreEvent) -> Self {
        Self {
            category: category_to_str(event.category),
            cards: event.cards.iter().copied().map(card_to_js).collect(),
            points: event.points(),
        }
    }
}

#[derive(Serialize)]
struct JsReport {
    events: Vec<JsEvent>,
    total: u8,
    text: String,
}

impl From<ScoreReport> for JsReport {
    fn from(report: ScoreReport) -> Self {
        Self {
            events: report.events().iter().map(JsEvent::from).collect(),
            total: report.total(),
            text: report.to_string(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "Spades",
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
    }
}

fn category_to_str(category: Category) -> &'static str {
    match category {
        Category::Fifteen => "Fifteen",
        Category::Pair => "Pair",
        Category::Run => "Run",
        Category::Flush => "Flush",
        Category::Nob => "Nob",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
