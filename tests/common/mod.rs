//! Helpers for rigging engine piles in integration tests.

#![expect(dead_code, reason = "each test binary uses a subset of the helpers")]

use tablecards::{Card, CardId, Cards, Facing, Pile, Suit, Value};

pub use Suit::{Clubs, Diamonds, Hearts, Spades};
pub use Value::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};

/// Installs a test-writer subscriber so `RUST_LOG` shows engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns one unused copy of each face, marking it used.
pub fn pick(cards: &Cards, used: &mut Vec<CardId>, faces: &[(Value, Suit)]) -> Vec<CardId> {
    faces
        .iter()
        .map(|&(value, suit)| {
            let id = cards
                .find(Card::new(value, suit))
                .find(|id| !used.contains(id))
                .expect("face available");
            used.push(id);
            id
        })
        .collect()
}

/// Returns one card with the given face.
pub fn id(cards: &Cards, value: Value, suit: Suit) -> CardId {
    cards.find(Card::new(value, suit)).next().expect("face in arena")
}

/// Returns every card not in `used`, in arena order.
pub fn rest(cards: &Cards, used: &[CardId]) -> Vec<CardId> {
    cards.ids().filter(|id| !used.contains(id)).collect()
}

/// Empties every pile.
pub fn clear(piles: &mut [&mut Pile]) {
    for pile in piles.iter_mut() {
        pile.take_all();
    }
}

/// Places cards bottom first.
pub fn fill(pile: &mut Pile, ids: &[CardId], facing: Facing) {
    for &id in ids {
        pile.add(id, facing);
    }
}

/// Returns the faces of a pile, bottom first.
pub fn faces(cards: &Cards, pile: &Pile) -> Vec<Card> {
    pile.iter().map(|id| cards[id]).collect()
}
