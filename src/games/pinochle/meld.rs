//! Meld scoring.
//!
//! Each component is scored once from the revealed cards. A component scores
//! its double value when every required card is present twice, otherwise
//! its single value when every required card is present at least once.
//! The trump marriage inside a run is scored as a marriage, so the run
//! component itself is worth four less than the full run.

use alloc::vec::Vec;

use crate::card::{Card, CardId, Cards, Suit, Value};

/// Values of the trump run, in addition to its marriage.
const RUN: (u32, u32) = (11, 142);
/// Pinochle: jack of diamonds and queen of spades.
const PINOCHLE: (u32, u32) = (4, 30);
/// Rank-around values: one card of the rank in every suit.
const AROUNDS: [(Value, u32, u32); 4] = [
    (Value::Ace, 10, 100),
    (Value::King, 8, 80),
    (Value::Queen, 6, 60),
    (Value::Jack, 4, 40),
];

/// Breakdown of one player's meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeldScore {
    /// Jack, queen, king, ten and ace of trump.
    pub run: u32,
    /// Aces, kings, queens and jacks around.
    pub arounds: u32,
    /// One point per nine of trump.
    pub nines: u32,
    /// Jack of diamonds with queen of spades.
    pub pinochle: u32,
    /// King and queen of a suit.
    pub marriages: u32,
}

impl MeldScore {
    /// Returns the sum of every component.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.run + self.arounds + self.nines + self.pinochle + self.marriages
    }
}

/// Scores the revealed cards with the given trump suit.
///
/// # Example
///
/// ```
/// use tablecards::{Card, Cards, Suit, Value};
/// use tablecards::games::pinochle::meld::score_meld;
///
/// let mut cards = Cards::new();
/// let meld = [
///     cards.alloc(Card::new(Value::King, Suit::Clubs)),
///     cards.alloc(Card::new(Value::Queen, Suit::Clubs)),
/// ];
/// assert_eq!(score_meld(&cards, Suit::Clubs, &meld).total(), 4);
/// assert_eq!(score_meld(&cards, Suit::Hearts, &meld).total(), 2);
/// ```
#[must_use]
pub fn score_meld(cards: &Cards, trump: Suit, meld: &[CardId]) -> MeldScore {
    let faces: Vec<Card> = meld.iter().filter_map(|&id| cards.get(id)).collect();

    let run_cards = [Value::Jack, Value::Queen, Value::King, Value::Ten, Value::Ace]
        .map(|value| Card::new(value, trump));

    let arounds = AROUNDS
        .iter()
        .map(|&(value, single, double)| {
            let required = Suit::ALL.map(|suit| Card::new(value, suit));
            has_every(&faces, &required, single, double)
        })
        .sum::<u32>();

    let marriages = Suit::ALL
        .iter()
        .map(|&suit| {
            let (single, double) = if suit == trump { (4, 8) } else { (2, 4) };
            let required = [Card::new(Value::King, suit), Card::new(Value::Queen, suit)];
            has_every(&faces, &required, single, double)
        })
        .sum::<u32>();

    let nines = faces
        .iter()
        .filter(|face| **face == Card::new(Value::Nine, trump))
        .count() as u32;

    let pinochle_cards = [
        Card::new(Value::Jack, Suit::Diamonds),
        Card::new(Value::Queen, Suit::Spades),
    ];

    MeldScore {
        run: has_every(&faces, &run_cards, RUN.0, RUN.1),
        arounds,
        nines,
        pinochle: has_every(&faces, &pinochle_cards, PINOCHLE.0, PINOCHLE.1),
        marriages,
    }
}

fn has_every(faces: &[Card], required: &[Card], single: u32, double: u32) -> u32 {
    let least = required
        .iter()
        .map(|card| faces.iter().filter(|face| *face == card).count())
        .min()
        .unwrap_or(0);
    match least {
        0 => 0,
        1 => single,
        _ => double,
    }
}
